use std::path::PathBuf;

use blockfall_engine::GameConfig;

use crate::command::config_file;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct DumpConfigArg {
    /// File to write the configuration to (stdout when omitted)
    #[clap(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &DumpConfigArg) -> anyhow::Result<()> {
    let DumpConfigArg { output } = arg;
    config_file::save(&GameConfig::default(), output.as_deref())
}
