// SPDX-FileCopyrightText: 2024 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use platform_abstraction_layer::{TextureRef, Viewport};
use sdl2::{
    audio::AudioDevice,
    controller::GameController,
    haptic::Haptic,
    image::{InitFlag, Sdl2ImageContext},
    render::{Texture, TextureCreator, WindowCanvas},
    ttf::Sdl2TtfContext,
    video::WindowContext,
    AudioSubsystem, EventPump, EventSubsystem, GameControllerSubsystem, HapticSubsystem, Sdl,
    VideoSubsystem,
};
use tracing::{debug, info, warn};

use crate::{
    audio::ByteCallback, textures::TextureSlots, timing::Stopwatch, video::VideoPlayer,
    window::DisplayBounds, EngineConfig, EngineError,
};

/// Owns the window, the renderer, every texture and the input devices, and
/// forwards the game's requests to SDL.
///
/// Created once at startup with [`Engine::init`] and passed by reference to
/// whatever needs to draw or read input. SDL's video and event functions may
/// only be used from the main thread, so this type is neither `Send` nor
/// `Sync`.
pub struct Engine {
    pub(crate) canvas: WindowCanvas,
    pub(crate) texture_creator: TextureCreator<WindowContext>,
    pub(crate) textures: TextureSlots<Texture>,

    /// The main render target, which is letterboxed onto the window.
    pub(crate) assist: Option<TextureRef>,
    pub(crate) logo: Option<TextureRef>,
    /// White square used by [`Engine::render_square_texture`], created on
    /// first use.
    pub(crate) square: Option<TextureRef>,
    /// None when rendering to the window.
    pub(crate) render_target: Option<TextureRef>,

    pub(crate) viewport: Viewport,
    pub(crate) full_screen: bool,
    pub(crate) bounds: DisplayBounds,
    pub(crate) title: String,
    pub(crate) stopwatch: Stopwatch,

    pub(crate) controller: Option<GameController>,
    pub(crate) haptic: Option<Haptic>,
    pub(crate) audio_device: Option<AudioDevice<ByteCallback>>,
    pub(crate) video_player: Option<Box<dyn VideoPlayer>>,

    pub(crate) ttf: Option<Sdl2TtfContext>,
    _image: Option<Sdl2ImageContext>,
    pub(crate) event_pump: EventPump,
    pub(crate) events: EventSubsystem,
    pub(crate) controllers: GameControllerSubsystem,
    pub(crate) haptics: Option<HapticSubsystem>,
    pub(crate) audio: Option<AudioSubsystem>,
    pub(crate) video: VideoSubsystem,
    pub(crate) sdl: Sdl,
}

impl Engine {
    /// Initializes SDL and its image and font libraries, opens the window and
    /// its renderer, and opens the first connected game controller.
    ///
    /// Haptics, audio, image loading and text rendering are optional: if they
    /// fail to initialize, a warning is logged and the functions depending on
    /// them return errors.
    pub fn init(config: EngineConfig) -> Result<Engine, EngineError> {
        let sdl = sdl2::init()?;
        let video = sdl.video()?;
        let controllers = sdl.game_controller()?;
        let events = sdl.event()?;
        let event_pump = sdl.event_pump()?;
        let haptics = sdl
            .haptic()
            .inspect_err(|err| warn!("Haptic feedback is not available: {err}"))
            .ok();
        let audio = sdl
            .audio()
            .inspect_err(|err| warn!("Audio is not available: {err}"))
            .ok();

        let scale_quality = config.scale_quality.hint_value();
        if !sdl2::hint::set("SDL_RENDER_SCALE_QUALITY", scale_quality) {
            debug!("SDL ignored the render scale quality hint \"{scale_quality}\".");
        }

        let mut window = video.window(&config.title, config.start_width, config.start_height);
        window.position_centered().resizable().allow_highdpi();
        if config.full_screen {
            window.fullscreen_desktop();
        }
        let window = window.build()?;

        let mut canvas = window.into_canvas().accelerated().target_texture();
        if config.vsync {
            canvas = canvas.present_vsync();
        }
        let canvas = canvas.build()?;
        let texture_creator = canvas.texture_creator();

        let ttf = sdl2::ttf::init()
            .inspect_err(|err| warn!("Text rendering is not available: {err}"))
            .ok();
        let image = sdl2::image::init(InitFlag::PNG | InitFlag::JPG)
            .inspect_err(|err| warn!("Image loading may be limited to BMP: {err}"))
            .ok();

        let (window_w, window_h) = canvas.window().size();
        let bounds = DisplayBounds::of_all_displays(&video, (window_w as i32, window_h as i32));
        info!(
            "Created a {}x{} window with the {} renderer, display area is {:?}.",
            window_w,
            window_h,
            canvas.info().name,
            bounds,
        );

        let mut viewport = Viewport::new(config.keep_ratio);
        viewport.set_ratio(config.ratio_x, config.ratio_y);

        let mut engine = Engine {
            canvas,
            texture_creator,
            textures: TextureSlots::new(),
            assist: None,
            logo: None,
            square: None,
            render_target: None,
            viewport,
            full_screen: config.full_screen,
            bounds,
            title: config.title,
            stopwatch: Stopwatch::new(),
            controller: None,
            haptic: None,
            audio_device: None,
            video_player: None,
            ttf,
            _image: image,
            event_pump,
            events,
            controllers,
            haptics,
            audio,
            video,
            sdl,
        };

        engine.set_present_position(None);
        engine.open_first_controller();
        if let Some(logo) = &config.logo {
            match engine.load_image(logo, false) {
                Ok(texture) => engine.logo = Some(texture),
                Err(err) => warn!("Failed to load the logo from {}: {err}", logo.display()),
            }
        }

        Ok(engine)
    }

    /// The renderer, for drawing operations the engine doesn't wrap.
    pub fn canvas(&self) -> &WindowCanvas {
        &self.canvas
    }

    /// The renderer, for drawing operations the engine doesn't wrap.
    pub fn canvas_mut(&mut self) -> &mut WindowCanvas {
        &mut self.canvas
    }

    /// The SDL context, for subsystems the engine doesn't wrap.
    pub fn sdl(&self) -> &Sdl {
        &self.sdl
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        let textures = self.textures.drain();
        debug!("Destroying {} textures.", textures.len());
        for texture in textures {
            // Safety: the textures were created by this engine's renderer,
            // which is still alive (fields are dropped after this), and
            // they're no longer reachable through any TextureRef.
            unsafe { texture.destroy() };
        }
    }
}
