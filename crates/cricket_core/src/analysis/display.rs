use crate::models::{BallEvent, Delivery, Innings};

/// Overs in `overs.balls` notation, e.g. "12.3".
pub fn format_overs(overs: u32, balls: u32) -> String {
    format!("{overs}.{balls}")
}

/// A bowler's legal balls as overs, e.g. 20 balls of a 6-ball over -> "3.2".
pub fn format_bowler_overs(balls: u32, balls_per_over: u32) -> String {
    let per_over = balls_per_over.max(1);
    format_overs(balls / per_over, balls % per_over)
}

/// Short label for one delivery as shown in an over strip.
pub fn ball_display(event: &BallEvent) -> String {
    match &event.delivery {
        Delivery::Run { runs: 0 } => "•".to_string(),
        Delivery::Run { runs } => runs.to_string(),
        Delivery::Boundary4 => "4".to_string(),
        Delivery::Boundary6 => "6".to_string(),
        Delivery::Wide { extra_runs: 0 } => "Wd".to_string(),
        Delivery::Wide { extra_runs } => format!("{}Wd", 1 + extra_runs),
        Delivery::NoBall { bat_runs: 0 } => "Nb".to_string(),
        Delivery::NoBall { bat_runs } => format!("Nb+{bat_runs}"),
        Delivery::Bye { runs } => format!("{runs}b"),
        Delivery::LegBye { runs } => format!("{runs}lb"),
        Delivery::Wicket { runs_completed: 0, .. } => "W".to_string(),
        Delivery::Wicket { runs_completed, .. } => format!("W+{runs_completed}"),
        Delivery::Penalty { runs } => format!("{runs}p"),
        Delivery::DeadBall => "DB".to_string(),
    }
}

/// Labels for every delivery of over `over` (0-based).
pub fn over_display(innings: &Innings, over: u32) -> Vec<String> {
    innings.events.iter().filter(|e| e.over == over).map(ball_display).collect()
}

/// The over in progress, or the one just finished while a new bowler is awaited.
pub fn current_over_display(innings: &Innings) -> Vec<String> {
    let over = if innings.awaiting_bowler {
        innings.over_number.saturating_sub(1)
    } else {
        innings.over_number
    };
    over_display(innings, over)
}
