use crate::api::commands::{DecisionApi, SicBoBetApi};
use crate::api::dto::{OutcomeDto, SnapshotDto};
use crate::api::errors::ApiError;
use crate::domain::outcome::RoundOutcome;
use crate::engine::actions::Decision;
use crate::engine::table::RoundSnapshot;
use crate::eval::sic_bo::SicBoBet;

/// Маппинг решения игрока между API и engine.
pub fn decision_from_api(api: DecisionApi) -> Decision {
    match api {
        DecisionApi::Hit => Decision::Hit,
        DecisionApi::Stand => Decision::Stand,
        DecisionApi::Fold => Decision::Fold,
        DecisionApi::Call => Decision::Call,
        DecisionApi::Raise => Decision::Raise,
        DecisionApi::CallNumber => Decision::CallNumber,
        DecisionApi::Forfeit => Decision::Forfeit,
    }
}

pub fn decision_to_api(decision: Decision) -> DecisionApi {
    match decision {
        Decision::Hit => DecisionApi::Hit,
        Decision::Stand => DecisionApi::Stand,
        Decision::Fold => DecisionApi::Fold,
        Decision::Call => DecisionApi::Call,
        Decision::Raise => DecisionApi::Raise,
        Decision::CallNumber => DecisionApi::CallNumber,
        Decision::Forfeit => DecisionApi::Forfeit,
    }
}

/// Ставка Sic Bo из API. Грань тройки проверяет сама игра.
pub fn sic_bo_bet_from_api(api: Option<SicBoBetApi>) -> Result<SicBoBet, ApiError> {
    match api {
        Some(SicBoBetApi::Small) => Ok(SicBoBet::Small),
        Some(SicBoBetApi::Big) => Ok(SicBoBet::Big),
        Some(SicBoBetApi::Double) => Ok(SicBoBet::Double),
        Some(SicBoBetApi::Triple { face }) => Ok(SicBoBet::Triple(face)),
        Some(SicBoBetApi::AnyTriple) => Ok(SicBoBet::AnyTriple),
        None => Err(ApiError::bad_request("для Sic Bo нужен вид ставки")),
    }
}

pub fn outcome_to_dto(outcome: &RoundOutcome) -> OutcomeDto {
    OutcomeDto {
        round_id: outcome.round_id,
        game: outcome.game,
        kind: outcome.kind,
        label: outcome.label.clone(),
        stake: outcome.stake.0,
        tickets: outcome.reward.tickets.0,
        coins: outcome.reward.coins.0,
        stake_returned: outcome.stake_returned,
        hands: outcome.hands.clone(),
    }
}

pub fn snapshot_to_dto(snapshot: &RoundSnapshot) -> SnapshotDto {
    SnapshotDto {
        outcome: outcome_to_dto(&snapshot.outcome),
        consecutive_wins: snapshot.streak.consecutive_wins,
        bonus_eligible: snapshot.bonus_eligible,
    }
}
