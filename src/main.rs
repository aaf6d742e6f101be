use anyhow::Result;
use clap::{Parser, ValueEnum};
use term_arcade::game::GameConfig;
use term_arcade::modes::{PlatformerMode, SnakeMode};
use term_arcade::platformer::PlatformerConfig;

#[derive(Parser)]
#[command(name = "term_arcade")]
#[command(version, about = "Terminal arcade scenes: grid snake and a small platformer")]
struct Cli {
    /// Scene to run
    #[arg(long, default_value = "snake")]
    scene: Scene,

    /// Snake field preset
    #[arg(long, default_value = "classic")]
    preset: Preset,

    /// Override the snake field width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Override the snake field height in cells
    #[arg(long)]
    height: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Scene {
    /// Grid snake with walls, food, and a speeding tick
    Snake,
    /// Run and jump across a few ledges
    Platformer,
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    /// The original 40x30 field
    Classic,
    /// A smaller, slightly faster field
    Compact,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.scene {
        Scene::Snake => {
            let config = match cli.preset {
                Preset::Classic => GameConfig::classic(),
                Preset::Compact => GameConfig::compact(),
            };
            // with_grid clamps away fields too small to hold a game.
            let width = cli.width.unwrap_or(config.grid_width);
            let height = cli.height.unwrap_or(config.grid_height);
            let config = config.with_grid(width, height);

            SnakeMode::new(config).run().await
        }
        Scene::Platformer => PlatformerMode::new(PlatformerConfig::default()).run().await,
    }
}
