//! Симулятор раундов для разработки: играет N раундов выбранной игры
//! стандартными решениями и печатает JSON-сводку.

use std::collections::BTreeMap;
use std::path::PathBuf;

use casino_engine::domain::GameKind;
use casino_engine::engine::{Decision, EngineError, GameRules, GameTable, RoundPhase};
use casino_engine::eval::blackjack::score;
use casino_engine::eval::SicBoBet;
use casino_engine::games::{Bingo, Blackjack, CaribbeanStud, MoneyWheel, RedDog, SicBo, Slots, War};
use casino_engine::infra::{snapshot_to_dto, ConfigLoader, DeterministicRng, EngineConfig, InMemoryLedger, RngSeed};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum GameArg {
    Blackjack,
    RedDog,
    War,
    SicBo,
    Slots,
    CaribbeanStud,
    Bingo,
    Wheel,
}

impl From<GameArg> for GameKind {
    fn from(arg: GameArg) -> Self {
        match arg {
            GameArg::Blackjack => GameKind::Blackjack,
            GameArg::RedDog => GameKind::RedDog,
            GameArg::War => GameKind::War,
            GameArg::SicBo => GameKind::SicBo,
            GameArg::Slots => GameKind::Slots,
            GameArg::CaribbeanStud => GameKind::CaribbeanStud,
            GameArg::Bingo => GameKind::Bingo,
            GameArg::Wheel => GameKind::Wheel,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "casino_sim_cli")]
#[command(about = "Play simulated rounds of one casino mini-game", long_about = None)]
struct Args {
    /// Game to simulate
    #[arg(long, value_enum)]
    game: GameArg,

    /// Number of rounds
    #[arg(long, default_value = "1000")]
    rounds: u32,

    /// Base seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Path to TOML engine config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stake per round (defaults to the lowest tier)
    #[arg(long)]
    bet: Option<u64>,

    /// Starting coin balance
    #[arg(long, default_value = "1000000")]
    bankroll: u64,
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    game: String,
    seed: u64,
    rounds_played: u32,
    wins: u32,
    forced_rounds: u32,
    win_rate: f64,
    longest_streak: u32,
    final_streak: u32,
    bonus_signals: u32,
    coins_start: u64,
    coins_end: u64,
    tickets_won: u64,
    outcomes: BTreeMap<String, u32>,
    last_snapshot: Option<serde_json::Value>,
}

async fn simulate<G: GameRules>(
    rules: G,
    wager: G::Wager,
    autoplay: impl Fn(&G::State) -> Decision,
    args: &Args,
    config: EngineConfig,
    seed: u64,
) -> Result<Summary, EngineError> {
    let game = rules.kind();
    let rng: DeterministicRng = RngSeed::from_u64(seed).derive(game, 0).to_rng();
    let bet = args.bet.unwrap_or(game.tiers()[0]);

    let mut table = GameTable::new(rules, InMemoryLedger::new(args.bankroll), rng, config);
    let mut feed = table.subscribe();
    let mut summary = Summary {
        game: game.to_string(),
        seed,
        coins_start: args.bankroll,
        ..Summary::default()
    };

    for _ in 0..args.rounds {
        match table.place_bet(bet, wager.clone()).await {
            Ok(_) => {}
            Err(EngineError::InsufficientFunds { .. }) => {
                warn!(game = %game, "банкролл закончился");
                break;
            }
            Err(err) => return Err(err),
        }

        while table.phase() == RoundPhase::Playing {
            let Some(session) = table.session() else { break };
            let decision = autoplay(&session.state);
            table.advance(decision).await?;
        }
        // InMemoryLedger без инъекций не падает, но повтор не повредит.
        while table.session().map_or(false, |s| s.awaiting_settlement()) {
            table.retry_settlement().await?;
        }

        if let Some(outcome) = table.last_outcome() {
            summary.rounds_played += 1;
            if outcome.kind.is_win() {
                summary.wins += 1;
            }
            if outcome.forced {
                summary.forced_rounds += 1;
            }
            *summary.outcomes.entry(format!("{:?}", outcome.kind)).or_insert(0) += 1;
        }
        summary.longest_streak = summary.longest_streak.max(table.streak().consecutive_wins);

        while let Ok(snapshot) = feed.try_recv() {
            if snapshot.bonus_eligible {
                summary.bonus_signals += 1;
            }
            summary.last_snapshot = serde_json::to_value(snapshot_to_dto(&snapshot)).ok();
        }
    }

    summary.final_streak = table.streak().consecutive_wins;
    summary.coins_end = table.ledger().coins().0;
    summary.tickets_won = table.ledger().tickets().0;
    if summary.rounds_played > 0 {
        summary.win_rate = f64::from(summary.wins) / f64::from(summary.rounds_played);
    }
    Ok(summary)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,casino_engine=warn".into()),
        )
        .init();

    let args = Args::parse();
    let mut loader = ConfigLoader::new();
    if let Some(path) = &args.config {
        loader = loader.with_path(path);
    }
    let config = loader.load()?;
    let seed = args.seed.unwrap_or_else(rand::random);

    info!(game = ?args.game, rounds = args.rounds, seed, "старт симуляции");

    let summary = match args.game {
        GameArg::Blackjack => {
            let hit_below = |s: &casino_engine::games::BlackjackState| {
                if score(&s.player) < 17 {
                    Decision::Hit
                } else {
                    Decision::Stand
                }
            };
            simulate(Blackjack, (), hit_below, &args, config, seed).await?
        }
        GameArg::RedDog => simulate(RedDog, (), |_| Decision::Call, &args, config, seed).await?,
        GameArg::War => simulate(War, (), |_| Decision::Stand, &args, config, seed).await?,
        GameArg::SicBo => simulate(SicBo, SicBoBet::Small, |_| Decision::Stand, &args, config, seed).await?,
        GameArg::Slots => simulate(Slots, (), |_| Decision::Stand, &args, config, seed).await?,
        GameArg::CaribbeanStud => simulate(CaribbeanStud, (), |_| Decision::Call, &args, config, seed).await?,
        GameArg::Bingo => simulate(Bingo, (), |_| Decision::CallNumber, &args, config, seed).await?,
        GameArg::Wheel => simulate(MoneyWheel, (), |_| Decision::Stand, &args, config, seed).await?,
    };

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
