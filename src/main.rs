#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging, ui, AiPlayer, CliPlayer, Game, InputError, Player, ShotReport, Side, Strategy,
    AI_TURN_DELAY_MS,
};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand, ValueEnum};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about = "Sea battle on a 6x6 grid against the computer", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum StrategyArg {
    HuntTarget,
    Random,
}

#[cfg(feature = "std")]
impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::HuntTarget => Strategy::HuntAndTarget,
            StrategyArg::Random => Strategy::Random,
        }
    }
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct MatchArgs {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = AI_TURN_DELAY_MS, help = "Pause before each computer shot, 0 to disable")]
    ai_delay_ms: u64,
    #[arg(long, value_enum, default_value_t = StrategyArg::HuntTarget)]
    strategy: StrategyArg,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer (the default).
    Play {
        #[command(flatten)]
        args: MatchArgs,
    },
    /// Watch two computer players fight it out.
    Demo {
        #[command(flatten)]
        args: MatchArgs,
        #[arg(long, value_enum, default_value_t = StrategyArg::HuntTarget)]
        first: StrategyArg,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { args }) => play(&args),
        Some(Commands::Demo { args, first }) => demo(&args, first.into()),
        None => play(&MatchArgs {
            seed: None,
            ai_delay_ms: AI_TURN_DELAY_MS,
            strategy: StrategyArg::HuntTarget,
        }),
    }
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn play(args: &MatchArgs) -> anyhow::Result<()> {
    let mut rng = seeded_rng(args.seed);
    let mut game = Game::new(&mut rng)?;
    let mut human = CliPlayer::stdio();
    let mut computer = AiPlayer::new(args.strategy.into());

    println!("{}", ui::banner());
    let result = run(
        &mut game,
        &mut rng,
        &mut human,
        &mut computer,
        ["You", "Computer"],
        Duration::from_millis(args.ai_delay_ms),
        Some(Side::Second),
    );
    match result {
        Err(err) if matches!(err.downcast_ref::<InputError>(), Some(InputError::Closed)) => {
            println!("\nInput closed, leaving the match.");
            Ok(())
        }
        other => other,
    }
}

#[cfg(feature = "std")]
fn demo(args: &MatchArgs, first: Strategy) -> anyhow::Result<()> {
    let mut rng = seeded_rng(args.seed);
    let mut game = Game::new(&mut rng)?;
    let mut first_ai = AiPlayer::new(first);
    let mut second_ai = AiPlayer::new(args.strategy.into());

    run(
        &mut game,
        &mut rng,
        &mut first_ai,
        &mut second_ai,
        ["Left AI", "Right AI"],
        Duration::from_millis(args.ai_delay_ms),
        None,
    )?;
    println!("{}", serde_json::to_string_pretty(&game.summary())?);
    Ok(())
}

/// Turn loop: render, pause before paced sides, fire, report.
#[cfg(feature = "std")]
fn run(
    game: &mut Game,
    rng: &mut SmallRng,
    first: &mut dyn Player,
    second: &mut dyn Player,
    names: [&str; 2],
    delay: Duration,
    paced: Option<Side>,
) -> anyhow::Result<()> {
    loop {
        println!("{}", RULE_LINE);
        println!(
            "{}",
            ui::render_boards(
                game.board(Side::First),
                names[0],
                game.board(Side::Second),
                names[1]
            )
        );
        let pause = match paced {
            Some(side) => side == game.turn(),
            None => true,
        };
        if pause && !delay.is_zero() {
            std::thread::sleep(delay);
        }
        let report: ShotReport = game.step(rng, first, second)?;
        println!("{}", ui::describe_shot(&report, names));
        if let Some(line) = ui::result_message(report.status, names) {
            println!("{}", RULE_LINE);
            println!(
                "{}",
                ui::render_boards(
                    game.board(Side::First),
                    names[0],
                    game.board(Side::Second),
                    names[1]
                )
            );
            println!("{}", line);
            return Ok(());
        }
    }
}

#[cfg(feature = "std")]
const RULE_LINE: &str = "--------------------------------------------------------------";
