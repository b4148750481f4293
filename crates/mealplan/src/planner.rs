use forkplan_shared::mealplan::PlanDay;
use rand::seq::IndexedRandom;
use time::{Date, Duration};

/// Monday and Sunday of the week containing `date`.
pub fn week_bounds(date: Date) -> forkplan_shared::Result<(Date, Date)> {
    let offset = i64::from(date.weekday().number_days_from_monday());
    let (Some(start), Some(end)) = (
        date.checked_sub(Duration::days(offset)),
        date.checked_add(Duration::days(6 - offset)),
    ) else {
        forkplan_shared::user!("date out of range");
    };

    Ok((start, end))
}

/// Seven consecutive days from `week_start`.
///
/// Locked days found in `existing` keep their recipe and notes. Every other day
/// draws a recipe uniformly from `recipe_ids`, with replacement.
pub fn spin_week<R: rand::Rng + ?Sized>(
    rng: &mut R,
    recipe_ids: &[String],
    week_start: Date,
    existing: &[PlanDay],
) -> forkplan_shared::Result<Vec<PlanDay>> {
    let mut days = Vec::with_capacity(7);

    for offset in 0..7 {
        let Some(date) = week_start.checked_add(Duration::days(offset)) else {
            forkplan_shared::user!("date out of range");
        };

        if let Some(locked) = existing.iter().find(|d| d.date == date && d.locked) {
            days.push(locked.clone());
            continue;
        }

        days.push(PlanDay {
            recipe_id: spin_day(rng, recipe_ids),
            ..PlanDay::empty(date)
        });
    }

    Ok(days)
}

pub fn spin_day<R: rand::Rng + ?Sized>(rng: &mut R, recipe_ids: &[String]) -> Option<String> {
    recipe_ids.choose(rng).cloned()
}
