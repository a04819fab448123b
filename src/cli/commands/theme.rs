use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::theme::{ThemeChange, ThemeLogic, gradient_names};
use crate::errors::AppResult;
use crate::i18n::Catalog;
use crate::ui::messages::{header, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Theme {
        text_color,
        text_size,
        bg_color,
        bg_gradient,
        bg_image,
        reset_background,
        show,
    } = cmd
    {
        let catalog = Catalog::for_config(cfg);

        let change = ThemeChange {
            text_color: text_color.clone(),
            text_size: *text_size,
            bg_color: bg_color.clone(),
            bg_gradient: bg_gradient.clone(),
            bg_image: bg_image.clone(),
            reset_background: *reset_background,
        };

        let mut current = cfg.clone();
        if !change.is_empty() {
            current = Config::update(|c| ThemeLogic::apply(c, &change))?;
            success(catalog.t("theme_saved"));
        }

        if *show || change.is_empty() {
            print_theme(&current, &catalog);
        }
    }

    Ok(())
}

fn print_theme(cfg: &Config, catalog: &Catalog) {
    header(catalog.t("theme_title"));

    let sample = ThemeLogic::text_style(cfg);
    let color = cfg
        .text_color
        .clone()
        .unwrap_or_else(|| catalog.t("theme_none").to_string());

    println!("{:<14} {}", catalog.t("theme_text_color"), sample.paint(color));
    println!("{:<14} {}", catalog.t("theme_text_size"), cfg.text_size);
    println!(
        "{:<14} {}",
        catalog.t("theme_background"),
        ThemeLogic::header_style(cfg).paint(cfg.background.describe())
    );

    let names: Vec<String> = gradient_names().collect();
    println!("\nGradients: {}", names.join(", "));
}
