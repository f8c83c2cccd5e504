use tcga_boxplot::{run, Config, PipelineError};

fn main() {
    env_logger::init();

    println!("--- TCGA Expression Analysis ---");

    let config = Config::default();
    if let Err(err) = run(&config) {
        // A missing sheet is the expected operator mistake; keep the
        // message short. Everything else gets the full error chain.
        match err.downcast_ref::<PipelineError>() {
            Some(PipelineError::SheetNotFound(path)) => {
                println!("Error: {} not found.", path.display());
            }
            _ => println!("Error: {err:#}"),
        }
    }
}
