use super::FlavorContribution;
use crate::cake::CakeComposition;
use crate::catalog::{FlavorNote, IngredientRef};
use crate::customer::TastePreferences;

pub(crate) fn taste_contributions(
    cake: &CakeComposition,
    tastes: &TastePreferences,
) -> (Vec<FlavorContribution>, f32) {
    let mut contributions = Vec::new();
    let mut raw_total = 0.0f32;

    if let Some(base) = cake.base() {
        tally(
            &mut contributions,
            &mut raw_total,
            IngredientRef::Base(base),
            base.flavor_notes(),
            tastes,
        );
    }

    for filling in cake.fillings() {
        tally(
            &mut contributions,
            &mut raw_total,
            IngredientRef::Filling(*filling),
            filling.flavor_notes(),
            tastes,
        );
    }

    if let Some(frosting) = cake.frosting() {
        tally(
            &mut contributions,
            &mut raw_total,
            IngredientRef::Frosting(frosting),
            frosting.flavor_notes(),
            tastes,
        );
    }

    for decoration in cake.decorations() {
        tally(
            &mut contributions,
            &mut raw_total,
            IngredientRef::Decoration(*decoration),
            decoration.flavor_notes(),
            tastes,
        );
    }

    // Strongest match first, so the head of the list is what to talk about.
    contributions.sort_by(|a, b| b.points.total_cmp(&a.points));

    (contributions, raw_total)
}

fn tally(
    contributions: &mut Vec<FlavorContribution>,
    total: &mut f32,
    ingredient: IngredientRef,
    notes: &'static [FlavorNote],
    tastes: &TastePreferences,
) {
    for note in notes {
        let points = f32::from(tastes.weight_for(note.axis)) * note.weight;
        contributions.push(FlavorContribution {
            ingredient,
            axis: note.axis,
            points,
        });
        *total += points;
    }
}
