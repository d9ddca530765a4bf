// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

mod cli;
mod settings;

use std::{path::Path, time::Duration};

use anyhow::Context;
use platform_sdl2::{
    delay,
    pal::{Color, ControllerButton, Event, Key, Rect, TextureRef, DEFAULT_WINDOW_SIZE},
    Engine,
};
use tracing::{info, warn};

/// Frame time used when vsync is off.
const FRAME_MS: f64 = 1000.0 / 60.0;
const CURSOR_SIZE: i32 = 16;

fn main() -> anyhow::Result<()> {
    let options = cli::options().run();
    tracing_subscriber::fmt()
        .with_max_level(options.verbosity_level)
        .with_writer(std::io::stderr)
        .init();

    let config = settings::read(options.config_path.as_deref())?;
    let vsync = config.vsync;
    let mut engine = Engine::init(config).context("Failed to initialize the engine")?;
    let (width, height) = DEFAULT_WINDOW_SIZE;
    engine
        .create_assist_texture(width, height)
        .context("Failed to create the render target")?;

    let mut image = match &options.image_path {
        Some(path) => Some(load(&mut engine, path)?),
        None => None,
    };
    let mut cursor = None;

    'running: loop {
        while let Some(event) = engine.poll_event() {
            match event {
                Event::Quit => break 'running,
                Event::KeyDown { repeat: false, .. } => match event.key() {
                    Some(Key::Escape) => break 'running,
                    Some(Key::F) => engine.toggle_fullscreen()?,
                    Some(Key::R) => {
                        let keep_ratio = engine.set_keep_ratio(!engine.keep_ratio());
                        info!("Keep ratio: {keep_ratio}");
                    }
                    Some(Key::Left) => {
                        let rotation = engine.set_rotation(engine.rotation() - 90.0);
                        info!("Rotation: {rotation}");
                    }
                    Some(Key::Right) => {
                        let rotation = engine.set_rotation(engine.rotation() + 90.0);
                        info!("Rotation: {rotation}");
                    }
                    Some(Key::S) => {
                        if let Err(err) = engine.save_screen(&options.screenshot_path) {
                            warn!("Failed to save a screenshot: {err}");
                        }
                    }
                    _ => {}
                },
                Event::MouseMotion { x, y, .. } => cursor = Some((x, y)),
                Event::MouseButtonDown { x, y, .. } => info!("Clicked at ({x}, {y})."),
                Event::ControllerButtonDown {
                    button: ControllerButton::A,
                    ..
                } => {
                    if let Err(err) = engine.rumble(0.5, Duration::from_millis(200)) {
                        warn!("Failed to rumble: {err}");
                    }
                }
                Event::DropFile { filename } => match load(&mut engine, Path::new(&filename)) {
                    Ok(texture) => {
                        if let Some(old) = image.replace(texture) {
                            engine.destroy_texture(old);
                        }
                    }
                    Err(err) => warn!("{err:#}"),
                },
                _ => {}
            }
        }

        engine.set_render_assist_texture()?;
        engine.fill_color(Color::BLACK, 0, 0, 0, 0)?;
        match image {
            Some(image) => engine.render_copy_rect(image, None, None, 0.0, false)?,
            None => engine.show_logo()?,
        }
        if let Some((x, y)) = cursor {
            let half = CURSOR_SIZE / 2;
            let rect = Rect::new(x - half, y - half, CURSOR_SIZE, CURSOR_SIZE);
            engine.render_square_texture(rect, Color::WHITE, 0x80)?;
        }

        engine.reset_render_target()?;
        engine.fill_color(Color::BLACK, 0, 0, 0, 0)?;
        engine.render_assist_texture_to_window()?;
        engine.render_present();
        if !vsync {
            delay(FRAME_MS);
        }
    }

    Ok(())
}

fn load(engine: &mut Engine, path: &Path) -> anyhow::Result<TextureRef> {
    let texture = engine
        .load_image(path, false)
        .with_context(|| format!("Failed to load image {}", path.display()))?;
    info!("Showing {}.", path.display());
    Ok(texture)
}
