use std::path::PathBuf;

use crate::cli::Cli;
use crate::core::{
    DrinkList, ReportOptions, create_drinklist, create_drinklist_from, preview_drinklist,
};
use crate::error::AppError;
use crate::output::{TableOptions, output_drinklist_json, print_drinklist_table};
use crate::utils::{Timezone, debug_log, expand_inputs};

/// Resolve the CLI into report options and the list of input files
fn prepare(cli: &Cli) -> Result<(Vec<PathBuf>, ReportOptions), AppError> {
    let inputs = expand_inputs(&cli.inputs)?;
    if inputs.len() > 1 && !cli.accumulate {
        return Err(AppError::MultipleInputs {
            count: inputs.len(),
        });
    }

    let options = ReportOptions {
        output_dir: cli
            .output_dir
            .clone()
            .unwrap_or_else(|| ReportOptions::default().output_dir),
        timezone: Timezone::parse(cli.timezone.as_deref())?,
        skip_blank: cli.skip_blank,
    };
    Ok((inputs, options))
}

fn build(cli: &Cli, inputs: &[PathBuf], options: &ReportOptions) -> Result<DrinkList, AppError> {
    if cli.dry_run {
        return preview_drinklist(inputs, options);
    }
    match inputs {
        [single] => create_drinklist(single, options),
        many => create_drinklist_from(many, options),
    }
}

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let (inputs, options) = prepare(cli)?;
    debug_log!(
        "{} input(s), writing to {}",
        inputs.len(),
        options.output_dir.display()
    );

    let list = build(cli, &inputs, &options)?;

    if cli.json {
        println!("{}", output_drinklist_json(&list)?);
    } else {
        print_drinklist_table(
            &list,
            TableOptions {
                use_color: cli.use_color(),
            },
        );
    }
    Ok(())
}
