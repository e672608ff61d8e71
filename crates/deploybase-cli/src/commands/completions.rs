use super::EXIT_SUCCESS;
use clap::CommandFactory;
use clap_complete::Shell;
use std::io::Write;

/// Completion script for `shell`, named after the command's own binary name.
fn render<C: CommandFactory>(shell: Shell, out: &mut impl Write) {
    let mut cmd = C::command();
    let bin = cmd.get_name().to_owned();
    clap_complete::generate(shell, &mut cmd, bin, out);
}

#[allow(clippy::unnecessary_wraps)]
pub fn run<C: CommandFactory>(shell: Shell) -> Result<u8, String> {
    render::<C>(shell, &mut std::io::stdout());
    Ok(EXIT_SUCCESS)
}
