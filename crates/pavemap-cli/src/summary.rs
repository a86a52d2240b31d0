use console::Style;
use pavemap_core::detection::ClassifierConfig;
use pavemap_core::pipeline::config::AnalysisConfig;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_classifier_summary(config: &ClassifierConfig) {
    let s = Styles::new();
    println!();
    print_classifier_section(&s, config);
}

pub fn print_analysis_summary(config: &AnalysisConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Pavemap Analysis"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(config.input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Top"),
        s.value.apply_to(config.top_n)
    );
    println!();

    print_classifier_section(&s, &config.classifier);

    println!("  {}", s.header.apply_to("Outputs"));
    let outputs = &config.outputs;
    for (name, path) in [
        ("Mask", &outputs.mask),
        ("Components", &outputs.components_report),
        ("Ranked", &outputs.ranked_report),
        ("Top-N", &outputs.visualization),
    ] {
        match path {
            Some(p) => println!(
                "    {:<12}{}",
                s.label.apply_to(name),
                s.path.apply_to(p.display())
            ),
            None => println!(
                "    {:<12}{}",
                s.label.apply_to(name),
                s.disabled.apply_to("skipped")
            ),
        }
    }
    println!();
}

fn print_classifier_section(s: &Styles, config: &ClassifierConfig) {
    println!("  {}", s.header.apply_to("Classifier"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Hue"),
        s.method.apply_to(config.hue)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Upper"),
        s.value.apply_to(config.upper_threshold)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Lower"),
        s.value.apply_to(config.lower_threshold)
    );
    if config.lower_threshold >= config.upper_threshold {
        println!(
            "    {}",
            s.disabled
                .apply_to("lower >= upper: few or no pixels will match")
        );
    }
    println!();
}
