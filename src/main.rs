// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! safshell desktop entry point.

use anyhow::{Context, Result};
use safshell::app::ShellApp;
use safshell::io::{catalog::PropertyCatalog, icons};
use safshell::settings::property_type::PropertyKey;
use safshell::settings::startup::{ShellConfig, MIN_WINDOW_SIZE, WINDOW_SIZE};
use safshell::ui::dialogs::{self, DialogText, Notice};
use safshell::ui::layout::{self, Toolbar};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = ShellConfig::from_env();
    log::debug!("Using {:?}", config);

    // Configuration errors block startup
    let catalog = match load_catalog(&config) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("Startup failed: {:#}", e);
            dialogs::show_startup_error(&e);
            return Err(e);
        }
    };

    let (title, text, toolbar, logo) = match bootstrap(&config, &catalog) {
        Ok(parts) => parts,
        Err(e) => {
            log::error!("Startup failed: {:#}", e);
            match Notice::properties_load_error(&catalog) {
                Ok(notice) => dialogs::show_error(&notice, &e),
                Err(missing) => {
                    log::warn!("{}", missing);
                    dialogs::show_startup_error(&e);
                }
            }
            return Err(e);
        }
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(WINDOW_SIZE)
        .with_min_inner_size(MIN_WINDOW_SIZE)
        .with_title(title.as_str());
    if let Some(logo) = logo {
        viewport = viewport.with_icon(logo);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(ShellApp::new(&cc.egui_ctx, text, toolbar)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

/// Load the properties file and report keys it leaves undefined.
fn load_catalog(config: &ShellConfig) -> Result<PropertyCatalog> {
    let catalog = PropertyCatalog::load(&config.properties_path)
        .context("loading application properties")?;
    if catalog.is_empty() {
        log::warn!("Properties file {} defines no keys", config.properties_path.display());
    }
    let undefined = catalog.missing_keys(PropertyKey::ALL);
    if !undefined.is_empty() {
        log::warn!("Properties left undefined: {:?}", undefined);
    }
    Ok(catalog)
}

/// Resolve everything the shell needs from the loaded catalog.
fn bootstrap(
    config: &ShellConfig,
    catalog: &PropertyCatalog,
) -> Result<(String, DialogText, Toolbar, Option<egui::IconData>)> {
    let title = catalog.resolve(PropertyKey::AppTitle)?.to_string();
    let text = DialogText::resolve(catalog)?;
    let toolbar = layout::build_toolbar(catalog, &config.images_dir)?;

    let logo_path = config.images_dir.join(catalog.resolve(PropertyKey::AppLogo)?);
    let logo = match icons::load_icon(&logo_path) {
        Ok(icon) => Some(icon.into_icon_data()),
        Err(e) => {
            log::warn!("Starting without window icon: {:#}", e);
            None
        }
    };

    Ok((title, text, toolbar, logo))
}
