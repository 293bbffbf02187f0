use clap::{Parser, ValueEnum};
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, AiPlayer, Game, Strategy};
use serde_json::json;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    HuntTarget,
    Random,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::HuntTarget => Strategy::HuntAndTarget,
            StrategyArg::Random => Strategy::Random,
        }
    }
}

/// Play one computer-vs-computer match and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, value_enum, default_value_t = StrategyArg::HuntTarget)]
    first: StrategyArg,
    #[arg(long, value_enum, default_value_t = StrategyArg::HuntTarget)]
    second: StrategyArg,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = SmallRng::seed_from_u64(cli.seed);
    let mut game = Game::new(&mut rng)?;
    let mut first = AiPlayer::new(cli.first.into());
    let mut second = AiPlayer::new(cli.second.into());

    game.play_out(&mut rng, &mut first, &mut second)?;

    let result = json!({
        "seed": cli.seed,
        "summary": game.summary(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
