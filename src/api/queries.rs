use crate::api::dto::TableViewDto;
use crate::engine::rules::GameRules;
use crate::engine::table::GameTable;
use crate::engine::RandomSource;
use crate::infra::ledger::Ledger;
use crate::infra::mapping::outcome_to_dto;

/// Собрать представление стола для фронта.
pub fn build_table_view<G: GameRules, L: Ledger, R: RandomSource>(table: &GameTable<G, L, R>) -> TableViewDto {
    let streak = table.streak();
    TableViewDto {
        game: table.game(),
        phase: table.phase(),
        tiers: table.rules().tiers().to_vec(),
        consecutive_wins: streak.consecutive_wins,
        bonus_eligible: streak.is_bonus_eligible(table.config().streak_bonus_threshold),
        hands: table.hands(),
        last_outcome: table.last_outcome().map(outcome_to_dto),
        settlement_pending: table.session().map_or(false, |s| s.awaiting_settlement()),
    }
}
