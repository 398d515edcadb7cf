//! Runs whole bakery days through the public API: drafting, serving,
//! leveling, unlocking, and resuming from a saved snapshot.

use std::cell::RefCell;

use bakeshop::catalog::{CakeBase, Decoration, Filling, Frosting};
use bakeshop::{
    BakerySession, CustomerId, PlayerProgress, ProgressStore, RatingTier, Roster, SnapshotError,
};

#[derive(Default)]
struct MemoryStore {
    slot: RefCell<Option<PlayerProgress>>,
}

impl MemoryStore {
    fn holding(progress: PlayerProgress) -> Self {
        Self {
            slot: RefCell::new(Some(progress)),
        }
    }

    fn snapshot(&self) -> Option<PlayerProgress> {
        self.slot.borrow().clone()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Result<Option<PlayerProgress>, SnapshotError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, progress: &PlayerProgress) -> Result<(), SnapshotError> {
        *self.slot.borrow_mut() = Some(progress.clone());
        Ok(())
    }
}

const SOPHIA: CustomerId = CustomerId(3);

/// Everything here is unlocked from day one, and Sophia rates it a
/// solid like, worth 25 XP a slice.
fn build_fruit_cake(session: &mut BakerySession<MemoryStore>) {
    session.choose_base(CakeBase::Chocolate).expect("base");
    session.add_filling(Filling::FruitPreserves).expect("preserves");
    session.add_filling(Filling::ChocolateGanache).expect("ganache");
    session.add_filling(Filling::Buttercream).expect("buttercream");
    session.choose_frosting(Frosting::Buttercream).expect("frosting");
    session.add_decoration(Decoration::FreshFruit).expect("fruit");
    session.add_decoration(Decoration::Sprinkles).expect("sprinkles");
    session.name_cake("Orchard Stack");
    session.price_cake(20);
}

#[test]
fn a_full_day_climbs_the_curve_and_opens_the_pantry() {
    let mut session =
        BakerySession::new(Roster::standard(), MemoryStore::default()).expect("fresh store");

    let mut last_experience = 0;
    for serving in 1..=10u64 {
        build_fruit_cake(&mut session);
        let receipt = session.serve(SOPHIA).expect("serving should commit");

        assert_eq!(receipt.outcome.tier, RatingTier::Like);
        assert_eq!(receipt.outcome.experience_awarded, 25);
        assert!(session.progress().experience > last_experience);
        last_experience = session.progress().experience;

        match serving {
            4 => {
                assert_eq!(receipt.level, 2);
                assert_eq!(receipt.announcements.len(), 1);
                assert_eq!(
                    receipt.announcements[0].message,
                    "You've unlocked Red Velvet cake base!"
                );
            }
            10 => {
                assert_eq!(receipt.level, 3);
                assert!(receipt.leveled_up());
                assert_eq!(
                    receipt.announcements[0].message,
                    "You've unlocked Fondant frosting!"
                );
            }
            _ => assert!(!receipt.leveled_up()),
        }
    }

    assert_eq!(session.progress().experience, 250);
    assert_eq!(session.progress().level, 3);
    assert_eq!(session.progress().coins, 300);
    assert_eq!(session.progress().cakes_served, 10);
    assert_eq!(session.creations().len(), 10);
    assert_eq!(session.feedback_log().len(), 10);
    assert_eq!(session.last_satisfaction(SOPHIA), Some(RatingTier::Like));

    // 100, 150, 200, and 250 XP have all been crossed; 300 has not.
    let mut next_draft_session = session;
    next_draft_session.choose_base(CakeBase::RedVelvet).expect("unlocked at 100");
    next_draft_session
        .choose_frosting(Frosting::Fondant)
        .expect("unlocked at 250");
    assert!(next_draft_session.choose_base(CakeBase::Lemon).is_err());
}

#[test]
fn a_saved_snapshot_resumes_where_the_day_ended() {
    let mut first_visit =
        BakerySession::new(Roster::standard(), MemoryStore::default()).expect("fresh store");
    for _ in 0..4 {
        build_fruit_cake(&mut first_visit);
        first_visit.serve(SOPHIA).expect("serving should commit");
    }
    let saved = first_visit
        .store()
        .snapshot()
        .expect("four servings were persisted");

    let mut second_visit =
        BakerySession::new(Roster::standard(), MemoryStore::holding(saved)).expect("resume");

    assert_eq!(second_visit.progress().experience, 100);
    assert_eq!(second_visit.progress().level, 2);
    assert_eq!(second_visit.progress().coins, 180);
    assert_eq!(second_visit.progress().cakes_served, 4);
    second_visit
        .choose_base(CakeBase::RedVelvet)
        .expect("the unlock survived the round trip");
    assert!(second_visit.choose_base(CakeBase::Marble).is_err());
}

#[test]
fn a_resumed_snapshot_trusts_experience_over_its_stored_level() {
    let mut tampered = PlayerProgress::starter();
    tampered.experience = 30;
    tampered.level = 7;

    let session = BakerySession::new(Roster::standard(), MemoryStore::holding(tampered))
        .expect("resume");

    assert_eq!(session.progress().level, 1);
    assert_eq!(session.progress().experience, 30);
}
