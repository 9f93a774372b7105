use console::Style;
use glimmer_core::adjust::AdjustParams;
use glimmer_core::config::AdjustConfig;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_adjust_summary(config: &AdjustConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Glimmer"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(7)));
    println!();

    if let Some(ref input) = config.input {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Input"),
            s.path.apply_to(input.display())
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    println!();

    print_params(&s, &config.params);
    println!();
}

fn print_params(s: &Styles, params: &AdjustParams) {
    let defaults = AdjustParams::default();

    print_row(
        s,
        "Brightness",
        format!("{:+}", params.brightness),
        params.brightness == defaults.brightness,
    );
    print_row(
        s,
        "Contrast",
        format!("{:+}", params.contrast),
        params.contrast == defaults.contrast,
    );
    print_row(
        s,
        "Opacity",
        format!("{:.2}", params.opacity),
        params.opacity == defaults.opacity,
    );
}

fn print_row(s: &Styles, label: &str, value: String, unchanged: bool) {
    if unchanged {
        println!(
            "  {:<14}{} {}",
            s.label.apply_to(label),
            s.value.apply_to(value),
            s.disabled.apply_to("(unchanged)")
        );
    } else {
        println!("  {:<14}{}", s.label.apply_to(label), s.value.apply_to(value));
    }
}
