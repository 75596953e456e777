use clap::{Parser, ValueEnum};
use image_categorizer::classification::coordinator::{Coordinator, CoordinatorError};
use image_categorizer::classification::render::Render;
use image_categorizer::config::{Config, EngineConfig};
use image_categorizer::image_classifier;
use image_categorizer::image_classifier::models::model_config::ModelConfig;
use image_categorizer::image_input::interface::Image;
use image_categorizer::library::logger::impl_console::LoggerConsole;
use image_categorizer::library::logger::interface::Logger;
use image_categorizer::result_display::impl_console::ResultDisplayConsole;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    Fake,
    Random,
    Onnx,
}

#[derive(Parser)]
#[command(author, version, about = "Classify photos with a pre-trained model", long_about = None)]
struct Cli {
    /// Classifier engine to run the images through
    #[arg(long, value_enum, default_value_t = EngineKind::Random)]
    engine: EngineKind,
    /// ONNX model file (required for --engine onnx)
    #[arg(long)]
    model: Option<PathBuf>,
    /// Labels file, one class per line (required for --engine onnx)
    #[arg(long)]
    labels: Option<PathBuf>,
    /// Model input size as HEIGHTxWIDTH
    #[arg(long, value_parser = parse_input_shape)]
    input_shape: Option<(u32, u32)>,
    /// Ranked labels kept per image
    #[arg(long)]
    top_k: Option<usize>,
    /// Images to analyse
    #[arg(required = true)]
    images: Vec<PathBuf>,
}

fn parse_input_shape(value: &str) -> Result<(u32, u32), String> {
    let (height, width) = value
        .split_once('x')
        .ok_or_else(|| format!("expected HEIGHTxWIDTH, got {}", value))?;
    let height = height.trim().parse::<u32>().map_err(|e| e.to_string())?;
    let width = width.trim().parse::<u32>().map_err(|e| e.to_string())?;
    if height == 0 || width == 0 {
        return Err("input shape must be non-zero".to_string());
    }
    Ok((height, width))
}

impl Cli {
    fn to_config(&self) -> Result<Config, Box<dyn std::error::Error + Send + Sync>> {
        let mut config = Config::default();

        if let Some(top_k) = self.top_k {
            config.top_k = top_k;
        }

        config.engine = match self.engine {
            EngineKind::Fake => EngineConfig::Fake,
            EngineKind::Random => EngineConfig::Random,
            EngineKind::Onnx => {
                let (Some(model), Some(labels)) = (&self.model, &self.labels) else {
                    return Err("--engine onnx needs both --model and --labels".into());
                };
                let mut model_config = ModelConfig::mobilenet_v2(model.clone(), labels.clone());
                if let Some(input_shape) = self.input_shape {
                    model_config.input_shape = input_shape;
                }
                EngineConfig::Onnx(model_config)
            }
        };

        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let config = cli.to_config()?;

    let logger = Arc::new(LoggerConsole::new(config.logger_timezone));

    let image_classifier = image_classifier::from_config(&config, logger.clone())?;

    let coordinator = Coordinator::new(logger.clone(), image_classifier);

    let render = Render::new(Arc::new(Mutex::new(ResultDisplayConsole::new())));

    render.render(&coordinator.current_outcome())?;

    let outcomes = coordinator.subscribe();
    let follower = {
        let render = render.clone();
        std::thread::spawn(move || render.follow(outcomes))
    };

    for path in &cli.images {
        let image = match Image::from_path(path) {
            Ok(image) => image,
            Err(e) => {
                logger.error(&format!("Cannot read {}: {}", path.display(), e))?;
                continue;
            }
        };

        logger.info(&format!("Analysing {}", path.display()))?;

        match coordinator.detect(&image) {
            Ok(()) => {}
            Err(CoordinatorError::ImageConversion(e)) => {
                logger.error(&format!("Skipping {}: {}", path.display(), e))?;
            }
            Err(CoordinatorError::Busy) => {
                logger.error(&format!("Skipping {}: classifier busy", path.display()))?;
            }
        }
    }

    drop(coordinator);

    follower
        .join()
        .map_err(|_| "render thread panicked".to_string())??;

    Ok(())
}
