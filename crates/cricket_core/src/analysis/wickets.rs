use serde::{Deserialize, Serialize};

use crate::models::{Delivery, DismissalKind, Innings, PlayerId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WicketFall {
    /// 1 for the first wicket of the innings.
    pub wicket: u32,
    /// Running score just before the wicket delivery.
    pub score: u32,
    pub over: u32,
    pub ball: u32,
    pub player_id: PlayerId,
    pub kind: DismissalKind,
}

impl WicketFall {
    /// "45-2 (6.3)"
    pub fn label(&self) -> String {
        format!("{}-{} ({}.{})", self.score, self.wicket, self.over, self.ball)
    }
}

/// Fall-of-wicket series, replayed from the event log in order.
pub fn wicket_falls(innings: &Innings) -> Vec<WicketFall> {
    let mut falls = Vec::new();
    let mut score = 0;

    for event in &innings.events {
        if let Delivery::Wicket { kind, dismissed_id, .. } = &event.delivery {
            falls.push(WicketFall {
                wicket: falls.len() as u32 + 1,
                score,
                over: event.over,
                ball: event.ball,
                player_id: dismissed_id.clone(),
                kind: *kind,
            });
        }
        score += event.total_runs();
    }

    falls
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Partnership {
    pub runs: u32,
    /// Legal balls.
    pub balls: u32,
}

/// Runs and balls since the last wicket (or the start of the innings).
pub fn current_partnership(innings: &Innings) -> Partnership {
    let start = innings
        .events
        .iter()
        .rposition(|e| matches!(e.delivery, Delivery::Wicket { .. }))
        .map_or(0, |i| i + 1);

    innings.events[start..].iter().fold(Partnership::default(), |acc, event| Partnership {
        runs: acc.runs + event.total_runs(),
        balls: acc.balls + u32::from(event.legal),
    })
}
