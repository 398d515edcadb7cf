//! The experience curve. Each level step costs half again more than the
//! last, and a level is reached once the running XP total covers the sum
//! of every step below it.

const BASE_STEP: f64 = 100.0;
const GROWTH: f64 = 1.5;

/// XP needed to climb from `level` to `level + 1`. Levels start at 1;
/// `required_xp(1)` is 100, `required_xp(2)` is 150, and so on.
pub fn required_xp(level: u32) -> u64 {
    if level == 0 {
        return 0;
    }

    let step = BASE_STEP * GROWTH.powi(level as i32 - 1);
    if step.is_finite() && step < u64::MAX as f64 {
        step.floor() as u64
    } else {
        u64::MAX
    }
}

/// Total XP at which `level` begins.
pub fn experience_for_level(level: u32) -> u64 {
    let mut total: u64 = 0;
    for step_level in 1..level {
        total = match total.checked_add(required_xp(step_level)) {
            Some(sum) => sum,
            None => return u64::MAX,
        };
    }
    total
}

/// Highest level the running XP total has paid for. Never decreases as
/// experience grows, and arriving at a total in one award or many gives
/// the same answer.
pub fn level_for_experience(experience: u64) -> u32 {
    let mut level = 1;
    let mut spent: u64 = 0;
    loop {
        let next = match spent.checked_add(required_xp(level)) {
            Some(sum) => sum,
            None => break,
        };
        if experience >= next {
            spent = next;
            level += 1;
        } else {
            break;
        }
    }
    level
}

/// XP accumulated past the current level's floor.
pub fn experience_into_level(experience: u64) -> u64 {
    experience.saturating_sub(experience_for_level(level_for_experience(experience)))
}

/// XP still owed before the next level.
pub fn experience_to_next(experience: u64) -> u64 {
    let level = level_for_experience(experience);
    experience_for_level(level)
        .saturating_add(required_xp(level))
        .saturating_sub(experience)
}
