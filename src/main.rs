use clap::Parser;

use mandelbrot_explorer::cli::args::{CommandsEnum, MandelbrotExplorerArgs};
use mandelbrot_explorer::cli::render::render_frame;
use mandelbrot_explorer::cli::swatch::generate_palette_swatch;
use mandelbrot_explorer::core::file_io::{
    build_output_path_with_date_time, extract_base_name, maybe_date_time_string, FilePrefix,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: MandelbrotExplorerArgs = MandelbrotExplorerArgs::parse();

    let build_file_prefix = |command: &str, params_path: &str, date_time_out: bool| -> FilePrefix {
        let base_name = extract_base_name(params_path);
        FilePrefix {
            directory_path: build_output_path_with_date_time(
                command,
                base_name,
                &maybe_date_time_string(date_time_out),
            ),
            file_base: base_name.to_owned(),
        }
    };

    match &args.command {
        Some(CommandsEnum::Render(params)) => {
            let explorer_params =
                serde_json::from_str(&std::fs::read_to_string(&params.params_path)?)?;
            render_frame(
                &explorer_params,
                build_file_prefix("render", &params.params_path, params.date_time_out),
            )?;
        }

        Some(CommandsEnum::Swatch(params)) => {
            let swatch_params =
                serde_json::from_str(&std::fs::read_to_string(&params.params_path)?)?;
            generate_palette_swatch(
                &swatch_params,
                build_file_prefix("swatch", &params.params_path, params.date_time_out),
            )?;
        }

        None => {
            println!("No command specified; run with --help for usage.");
        }
    }
    Ok(())
}
