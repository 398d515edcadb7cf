use crate::cake::{CakeComposition, DraftError};
use crate::catalog::{CakeBase, Decoration, Filling, Frosting, IngredientRef};
use crate::progression::PlayerProgress;
use crate::session::SelectionError;

use super::common::{build_starter_cake, fresh_session, session_with};

#[test]
fn locked_ingredients_are_turned_away() {
    let mut session = fresh_session();

    assert_eq!(
        session.choose_base(CakeBase::RedVelvet),
        Err(SelectionError::Locked(IngredientRef::Base(
            CakeBase::RedVelvet
        )))
    );
    assert_eq!(
        session.add_filling(Filling::Custard),
        Err(SelectionError::Locked(IngredientRef::Filling(
            Filling::Custard
        )))
    );
    assert_eq!(
        session.choose_frosting(Frosting::Fondant),
        Err(SelectionError::Locked(IngredientRef::Frosting(
            Frosting::Fondant
        )))
    );
    assert_eq!(
        session.add_decoration(Decoration::EdibleFlowers),
        Err(SelectionError::Locked(IngredientRef::Decoration(
            Decoration::EdibleFlowers
        )))
    );

    assert_eq!(session.draft().base(), None);
    assert!(session.draft().fillings().is_empty());
    assert_eq!(session.draft().frosting(), None);
    assert!(session.draft().decorations().is_empty());
}

#[test]
fn draft_rules_surface_through_selection() {
    let mut session = fresh_session();
    session.add_filling(Filling::ChocolateGanache).expect("first add");

    assert_eq!(
        session.add_filling(Filling::ChocolateGanache),
        Err(SelectionError::Draft(DraftError::DuplicateFilling(
            Filling::ChocolateGanache
        )))
    );
}

#[test]
fn filling_limit_holds_even_with_a_bigger_pantry() {
    let mut progress = PlayerProgress::starter();
    progress.unlocked.insert(IngredientRef::Filling(Filling::Custard));
    let mut session = session_with(progress);

    session.add_filling(Filling::Buttercream).expect("first");
    session.add_filling(Filling::ChocolateGanache).expect("second");
    session.add_filling(Filling::FruitPreserves).expect("third");

    assert_eq!(
        session.add_filling(Filling::Custard),
        Err(SelectionError::Draft(DraftError::FillingLimitReached))
    );
}

#[test]
fn removals_report_whether_something_came_off() {
    let mut session = fresh_session();
    session.add_filling(Filling::Buttercream).expect("add filling");
    session.add_decoration(Decoration::Sprinkles).expect("add decoration");

    assert!(session.remove_filling(Filling::Buttercream));
    assert!(!session.remove_filling(Filling::Buttercream));
    assert!(session.remove_decoration(Decoration::Sprinkles));
    assert!(!session.remove_decoration(Decoration::Sprinkles));
}

#[test]
fn start_over_clears_the_bench() {
    let mut session = fresh_session();
    build_starter_cake(&mut session);
    assert!(session.draft().is_completable());

    session.start_over();

    assert_eq!(*session.draft(), CakeComposition::new());
}

#[test]
fn suggested_price_totals_the_parts_on_the_bench() {
    let mut session = fresh_session();
    session.choose_base(CakeBase::Chocolate).expect("base");
    session.add_filling(Filling::ChocolateGanache).expect("filling");
    session.choose_frosting(Frosting::Buttercream).expect("frosting");
    session.add_decoration(Decoration::Sprinkles).expect("decoration");

    assert_eq!(session.apply_suggested_price(), 25);
    assert_eq!(session.draft().price(), 25);
}
