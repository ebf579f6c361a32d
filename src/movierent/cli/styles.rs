use console::Style;
use once_cell::sync::Lazy;

pub struct RentalTheme {
    pub header: Style,
    pub rule: Style,
    pub null: Style,
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,
}

pub static RENTAL_THEME: Lazy<RentalTheme> = Lazy::new(|| RentalTheme {
    header: Style::new().bold(),
    rule: Style::new().dim(),
    null: Style::new().dim().italic(),
    info: Style::new().dim(),
    success: Style::new().green(),
    warning: Style::new().yellow(),
    error: Style::new().red().for_stderr(),
});
