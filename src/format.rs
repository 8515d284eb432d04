/// Render a duration in whole seconds as `H:MM:SS`. Hours are not folded
/// into days, so long uptimes read as e.g. `79:03:15`.
pub fn format_uptime(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}
