use casino_engine::{
    api::{
        commands::{Command, DecisionApi, PlaceBetCommand, SicBoBetApi},
        dto::CommandResponse,
        errors::{ApiError, ApiErrorKind},
        queries::build_table_view,
    },
    domain::{card::Card, outcome::HandReport, GameKind},
    engine::{AlwaysForce, Decision, EngineError, GameTable, NeverForce, RoundPhase},
    eval::SicBoBet,
    games::{Blackjack, War},
    infra::{
        decision_from_api, decision_to_api, sic_bo_bet_from_api, snapshot_to_dto, DeterministicRng, EngineConfig,
        InMemoryLedger, ScriptedRng,
    },
};

#[test]
fn engine_errors_map_to_api_kinds() {
    let err: ApiError = EngineError::LedgerUnavailable("offline".into()).into();
    assert_eq!(err.kind, ApiErrorKind::LedgerUnavailable);
    assert!(err.retryable);

    let err: ApiError = EngineError::InsufficientFunds { stake: 50 }.into();
    assert_eq!(err.kind, ApiErrorKind::InsufficientFunds);
    assert!(!err.retryable);

    let err: ApiError = EngineError::InvalidBetTier {
        game: GameKind::War,
        amount: 7,
    }
    .into();
    assert_eq!(err.kind, ApiErrorKind::InvalidBetTier);
    assert!(err.message.contains('7'));

    for e in [
        EngineError::RoundInProgress,
        EngineError::NoActiveRound,
        EngineError::SettlementPending,
        EngineError::IllegalDecision {
            decision: Decision::Hit,
            phase: RoundPhase::Betting,
        },
    ] {
        assert_eq!(ApiError::from(e).kind, ApiErrorKind::InvalidCommand);
    }
}

#[test]
fn decisions_roundtrip_through_api() {
    for d in [
        Decision::Hit,
        Decision::Stand,
        Decision::Fold,
        Decision::Call,
        Decision::Raise,
        Decision::CallNumber,
        Decision::Forfeit,
    ] {
        assert_eq!(decision_from_api(decision_to_api(d)), d);
    }
}

#[test]
fn sic_bo_bet_is_required_and_mapped() {
    assert_eq!(sic_bo_bet_from_api(Some(SicBoBetApi::Triple { face: 4 })), Ok(SicBoBet::Triple(4)));
    assert_eq!(sic_bo_bet_from_api(Some(SicBoBetApi::AnyTriple)), Ok(SicBoBet::AnyTriple));

    let err = sic_bo_bet_from_api(None).unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::BadRequest);
}

#[test]
fn commands_deserialize_from_frontend_json() {
    let json = r#"{"PlaceBet":{"game":"SicBo","amount":50,"sic_bo_bet":{"triple":{"face":6}}}}"#;
    let cmd: Command = serde_json::from_str(json).unwrap();
    assert_eq!(
        cmd,
        Command::PlaceBet(PlaceBetCommand {
            game: GameKind::SicBo,
            amount: 50,
            sic_bo_bet: Some(SicBoBetApi::Triple { face: 6 }),
        })
    );

    let cmd: Command = serde_json::from_str(r#"{"PlaceBet":{"game":"War","amount":50}}"#).unwrap();
    assert!(matches!(cmd, Command::PlaceBet(PlaceBetCommand { sic_bo_bet: None, .. })));

    let cmd: Command = serde_json::from_str(r#"{"Advance":"call_number"}"#).unwrap();
    assert_eq!(cmd, Command::Advance(DecisionApi::CallNumber));
}

#[tokio::test]
async fn table_view_hides_hole_card_while_playing() {
    let rng = ScriptedRng::new(1).with_cards(["Tc", "6d", "Kh", "7s"].map(|s| s.parse::<Card>().unwrap()));
    let mut table = GameTable::new(Blackjack, InMemoryLedger::new(1_000), rng, EngineConfig::default())
        .with_bias(NeverForce);

    let view = build_table_view(&table);
    assert_eq!(view.phase, RoundPhase::Betting);
    assert_eq!(view.tiers, vec![50, 100, 250, 500]);
    assert!(view.hands.is_none());

    table.place_bet(50, ()).await.unwrap();
    let view = build_table_view(&table);
    assert_eq!(view.phase, RoundPhase::Playing);
    let Some(HandReport::Cards { player, dealer }) = view.hands else {
        panic!("cards expected");
    };
    assert_eq!(player.len(), 2);
    assert_eq!(dealer.len(), 1);
    assert!(view.last_outcome.is_none());
    assert!(!view.settlement_pending);
}

#[tokio::test]
async fn snapshot_dto_serializes_for_frontend() {
    let mut table = GameTable::new(War, InMemoryLedger::new(1_000), DeterministicRng::from_u64(3), EngineConfig::default())
        .with_bias(AlwaysForce);
    let mut feed = table.subscribe();
    table.ledger_mut().fail_next_credits(1);
    let _ = table.place_bet(50, ()).await;

    let view = build_table_view(&table);
    assert!(view.settlement_pending);
    assert_eq!(view.consecutive_wins, 1);

    let dto = snapshot_to_dto(&feed.try_recv().unwrap());
    assert_eq!(dto.outcome.stake, 50);
    assert_eq!(dto.consecutive_wins, 1);
    assert!(!dto.bonus_eligible);

    let json = dto.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["outcome"]["kind"], "Win");
    assert_eq!(value["outcome"]["coins"], 100);

    let response = CommandResponse::Finished(dto);
    assert!(serde_json::to_string(&response).unwrap().contains("Finished"));
}
