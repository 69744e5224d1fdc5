use crate::artifacts::entry::state::EntryState;
use std::io::Write;

/// Print every state name painted the way entries in that state are painted
pub fn show_legend(writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer, "Color codes:")?;
    for state in EntryState::ALL {
        writeln!(writer, "{}", state.paint(state.label()))?;
    }

    Ok(())
}
