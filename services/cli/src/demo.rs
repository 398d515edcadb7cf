use std::path::PathBuf;

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use bakeshop::cake::MAX_FILLINGS;
use bakeshop::catalog::{CakeBase, Decoration, Filling, Frosting, IngredientRef, TasteAxis};
use bakeshop::customer::TastePreferences;
use bakeshop::session::{ProgressSummary, ServeReceipt};
use bakeshop::{BakerySession, ProgressStore, RatingTier, Roster, ServeError};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::infra::{InMemoryStore, JsonFileStore};
use crate::telemetry;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// How many walk-in customers to serve. Defaults to 8.
    #[arg(long)]
    pub(crate) servings: Option<u32>,
    /// Seed for the walk-in draw. Defaults to 7 so runs are repeatable.
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Load customers from a CSV file instead of the standard roster
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ServeArgs {
    /// Cake base, e.g. vanilla or redVelvet
    #[arg(long, value_parser = crate::infra::parse_base)]
    pub(crate) base: CakeBase,
    /// Filling to layer in; repeat for more, up to three
    #[arg(long = "filling", value_parser = crate::infra::parse_filling)]
    pub(crate) fillings: Vec<Filling>,
    /// Frosting, e.g. buttercream or whippedCream
    #[arg(long, value_parser = crate::infra::parse_frosting)]
    pub(crate) frosting: Frosting,
    /// Decoration to place; repeat for more
    #[arg(long = "decoration", value_parser = crate::infra::parse_decoration)]
    pub(crate) decorations: Vec<Decoration>,
    /// A name for the cake
    #[arg(long)]
    pub(crate) name: String,
    /// Asking price in coins. Defaults to the suggested catalog total.
    #[arg(long)]
    pub(crate) price: Option<u32>,
    /// Customer to serve, by name. A random walk-in when omitted.
    #[arg(long)]
    pub(crate) customer: Option<String>,
    /// Seed for the walk-in draw when no customer is named
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RosterArgs {
    /// Load customers from a CSV file instead of the standard roster
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        servings,
        seed,
        roster,
    } = args;

    let config = bootstrap()?;
    let servings = servings.unwrap_or(8);
    let mut rng = StdRng::seed_from_u64(seed.unwrap_or(7));

    let roster = match roster {
        Some(path) => Roster::from_csv_path(path)?,
        None => load_roster(&config)?,
    };
    let mut session = BakerySession::new(roster, InMemoryStore::default())?;
    if session.roster().is_empty() {
        return Err(AppError::Serve(ServeError::EmptyRoster));
    }

    println!("Bakeshop walk-in demo");
    println!(
        "{} regulars on the roster | {} servings | progress kept in memory only",
        session.roster().len(),
        servings
    );

    for serving in 1..=servings {
        let (customer_id, customer_name, tastes) = {
            let customer = match session.roster().walk_in(&mut rng) {
                Some(customer) => customer,
                None => return Err(AppError::Serve(ServeError::EmptyRoster)),
            };
            (customer.id, customer.name.clone(), customer.tastes)
        };

        println!("\nServing {serving} of {servings}: {customer_name} walks in");
        build_tailored_cake(&mut session, &tastes)?;
        let receipt = session.serve(customer_id)?;
        render_receipt(&receipt);
    }

    println!("\nEnd of day");
    render_summary(&session.progress_summary());

    let loved = session
        .feedback_log()
        .iter()
        .filter(|entry| entry.tier == RatingTier::Love)
        .count();
    println!(
        "- {} of {} servings were loved",
        loved,
        session.feedback_log().len()
    );

    Ok(())
}

pub(crate) fn run_serve(args: ServeArgs) -> Result<(), AppError> {
    let ServeArgs {
        base,
        fillings,
        frosting,
        decorations,
        name,
        price,
        customer,
        seed,
    } = args;

    let config = bootstrap()?;
    let roster = load_roster(&config)?;
    let store = JsonFileStore::new(config.snapshot_path());
    let mut session = BakerySession::new(roster, store)?;

    session.choose_base(base)?;
    for filling in fillings {
        session.add_filling(filling)?;
    }
    session.choose_frosting(frosting)?;
    for decoration in decorations {
        session.add_decoration(decoration)?;
    }
    session.name_cake(name);
    match price {
        Some(price) => session.price_cake(price),
        None => {
            let suggested = session.apply_suggested_price();
            println!("Priced at the suggested {suggested} coins");
        }
    }

    let receipt = match customer {
        Some(name) => {
            let customer_id = session
                .roster()
                .find_by_name(&name)
                .map(|profile| profile.id)
                .ok_or(AppError::UnknownCustomer(name))?;
            session.serve(customer_id)?
        }
        None => {
            let mut rng = rng_for(seed);
            session.serve_walk_in(&mut rng)?
        }
    };

    render_receipt(&receipt);
    println!("\nProgress saved to {}", config.snapshot_path().display());

    Ok(())
}

pub(crate) fn run_progress() -> Result<(), AppError> {
    let config = bootstrap()?;
    let roster = load_roster(&config)?;
    let session = BakerySession::new(roster, JsonFileStore::new(config.snapshot_path()))?;

    println!("Player progress from {}", config.snapshot_path().display());
    match serde_json::to_string_pretty(&session.progress_summary()) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("progress summary unavailable: {err}"),
    }

    Ok(())
}

pub(crate) fn run_roster(args: RosterArgs) -> Result<(), AppError> {
    let RosterArgs { csv } = args;

    let config = bootstrap()?;
    let roster = match csv {
        Some(path) => Roster::from_csv_path(path)?,
        None => load_roster(&config)?,
    };

    println!("Today's roster ({} customers)", roster.len());
    for customer in roster.customers() {
        println!(
            "- #{} {} | sweetness {} | fruitiness {} | richness {} | creativity {}",
            customer.id,
            customer.name,
            customer.tastes.sweetness,
            customer.tastes.fruitiness,
            customer.tastes.richness,
            customer.tastes.creativity
        );
    }

    Ok(())
}

fn bootstrap() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(
        ?config.environment,
        snapshot = %config.snapshot_path().display(),
        "bakeshop ready"
    );
    Ok(config)
}

fn load_roster(config: &AppConfig) -> Result<Roster, AppError> {
    match &config.roster_path {
        Some(path) => Ok(Roster::from_csv_path(path)?),
        None => Ok(Roster::standard()),
    }
}

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// What the bakery reaches for first when a customer leans toward one
/// axis. Lists are best-first and always end in day-one stock, so a
/// fresh pantry still completes a cake.
struct RecipePlan {
    bases: &'static [CakeBase],
    fillings: &'static [Filling],
    frostings: &'static [Frosting],
    decorations: &'static [Decoration],
    name: &'static str,
}

fn plan_for(axis: TasteAxis) -> RecipePlan {
    match axis {
        TasteAxis::Sweetness => RecipePlan {
            bases: &[CakeBase::Vanilla, CakeBase::Chocolate],
            fillings: &[Filling::Buttercream, Filling::CreamCheese, Filling::FruitPreserves],
            frostings: &[Frosting::Buttercream, Frosting::WhippedCream],
            decorations: &[Decoration::Sprinkles, Decoration::FreshFruit],
            name: "Sugar Cloud",
        },
        TasteAxis::Fruitiness => RecipePlan {
            bases: &[CakeBase::Lemon, CakeBase::Chocolate],
            fillings: &[
                Filling::FruitPreserves,
                Filling::ChocolateGanache,
                Filling::Buttercream,
            ],
            frostings: &[Frosting::WhippedCream, Frosting::Buttercream],
            decorations: &[
                Decoration::FreshFruit,
                Decoration::EdibleFlowers,
                Decoration::Sprinkles,
            ],
            name: "Orchard Crown",
        },
        TasteAxis::Richness => RecipePlan {
            bases: &[CakeBase::Chocolate, CakeBase::RedVelvet],
            fillings: &[Filling::ChocolateGanache, Filling::CreamCheese, Filling::Custard],
            frostings: &[Frosting::CreamCheese, Frosting::Buttercream],
            decorations: &[
                Decoration::ChocolateShavings,
                Decoration::Sprinkles,
                Decoration::FreshFruit,
            ],
            name: "Midnight Velvet",
        },
        TasteAxis::Creativity => RecipePlan {
            bases: &[CakeBase::Marble, CakeBase::Chocolate],
            fillings: &[Filling::Custard, Filling::Buttercream, Filling::ChocolateGanache],
            frostings: &[Frosting::Fondant, Frosting::WhippedCream],
            decorations: &[
                Decoration::EdibleFlowers,
                Decoration::FondantShapes,
                Decoration::Sprinkles,
            ],
            name: "Gallery Piece",
        },
    }
}

fn strongest_axis(tastes: &TastePreferences) -> TasteAxis {
    TasteAxis::ordered()
        .into_iter()
        .max_by_key(|axis| tastes.weight_for(*axis))
        .unwrap_or(TasteAxis::Sweetness)
}

/// Drafts the best cake the current pantry allows for this customer,
/// priced at the catalog total.
fn build_tailored_cake<S: ProgressStore>(
    session: &mut BakerySession<S>,
    tastes: &TastePreferences,
) -> Result<(), AppError> {
    let plan = plan_for(strongest_axis(tastes));
    let pantry = session.progress().unlocked.clone();

    if let Some(base) = plan
        .bases
        .iter()
        .copied()
        .find(|base| pantry.contains(IngredientRef::Base(*base)))
    {
        session.choose_base(base)?;
    }
    for filling in plan
        .fillings
        .iter()
        .copied()
        .filter(|filling| pantry.contains(IngredientRef::Filling(*filling)))
        .take(MAX_FILLINGS)
    {
        session.add_filling(filling)?;
    }
    if let Some(frosting) = plan
        .frostings
        .iter()
        .copied()
        .find(|frosting| pantry.contains(IngredientRef::Frosting(*frosting)))
    {
        session.choose_frosting(frosting)?;
    }
    for decoration in plan
        .decorations
        .iter()
        .copied()
        .filter(|decoration| pantry.contains(IngredientRef::Decoration(*decoration)))
    {
        session.add_decoration(decoration)?;
    }
    session.name_cake(plan.name);
    session.apply_suggested_price();

    Ok(())
}

fn render_receipt(receipt: &ServeReceipt) {
    println!(
        "- {} went to {} for {} coins",
        receipt.cake_name, receipt.customer_name, receipt.outcome.coins_earned
    );
    println!("  \"{}\"", receipt.outcome.feedback);
    println!(
        "  Rated {} at {:.2}/10 | +{} XP | balance {} coins",
        receipt.outcome.tier.label(),
        receipt.outcome.satisfaction,
        receipt.outcome.experience_awarded,
        receipt.coins_balance
    );
    if let Some(top) = receipt.outcome.top_contribution() {
        println!(
            "  Best pairing: {} (+{:.2} {})",
            top.ingredient.label(),
            top.points,
            top.axis.label()
        );
    }
    if receipt.leveled_up() {
        println!("  Level up! Now level {}", receipt.level);
    }
    for announcement in &receipt.announcements {
        println!("  {}", announcement.message);
    }
}

fn render_summary(summary: &ProgressSummary) {
    println!(
        "- Level {} | {} XP total | {} into this level, {} until the next",
        summary.level,
        summary.experience,
        summary.experience_into_level,
        summary.experience_to_next
    );
    println!(
        "- {} coins banked | {} cakes served",
        summary.coins, summary.cakes_served
    );
    println!("- Pantry unlocked:");
    for entry in &summary.catalog_progress {
        println!("    {}s: {}/{}", entry.kind_label, entry.unlocked, entry.total);
    }
}
