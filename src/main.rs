//! Battleshot entry point
//!
//! Handles platform-specific initialization and wires page events to the
//! session state machine.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::DVec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, HtmlElement, HtmlInputElement, MouseEvent};

    use battleshot::audio::{self, AudioManager};
    use battleshot::consts::GRID_SIZE;
    use battleshot::platform::{DomOverlay, dom, timer};
    use battleshot::renderer::{CanvasSurface, RocketRenderer, render_board};
    use battleshot::sim::{self, Frame, GameEvent, Overlay, OverlayTracker, Session, SoundCue};
    use battleshot::{Settings, Wager};

    /// Game instance holding all page state
    struct Game {
        settings: Settings,
        audio: AudioManager,
        betting_screen: HtmlElement,
        game_screen: HtmlElement,
        message: Element,
        board_canvas: HtmlCanvasElement,
        board_surface: CanvasSurface,
        /// Rocket layer before its sprite has loaded
        rocket_surface: Option<CanvasSurface>,
        rocket: Option<RocketRenderer<CanvasSurface>>,
        session: Option<Session>,
        overlays: OverlayTracker<DomOverlay>,
    }

    impl Game {
        /// Switch screens, draw the board, and hide a fresh ship
        fn start_session(&mut self) -> Result<(), JsValue> {
            dom::set_display(&self.betting_screen, "none")?;
            dom::set_display(&self.game_screen, "flex")?;

            let board = dom::board_placement(&self.board_canvas, GRID_SIZE);
            render_board(&mut self.board_surface, GRID_SIZE, board.cell_size);

            let seed = js_sys::Date::now() as u64;
            let session = Session::new(seed, board).map_err(|e| JsValue::from_str(&e.to_string()))?;
            self.overlays.clear();
            self.session = Some(session);
            Ok(())
        }

        /// Resize the rocket layer and put the rocket in the air
        fn begin_flight(&mut self) -> Result<bool, JsValue> {
            let viewport = dom::viewport()?;
            let (w, h) = (viewport.width as u32, viewport.height as u32);
            if let Some(rocket) = self.rocket.as_mut() {
                rocket.surface_mut().resize(w, h);
            } else if let Some(surface) = self.rocket_surface.as_mut() {
                surface.resize(w, h);
            }

            let board = dom::board_placement(&self.board_canvas, GRID_SIZE);
            let now = timer::now()?;
            Ok(self
                .session
                .as_mut()
                .is_some_and(|session| sim::begin_flight(session, board, &viewport, now)))
        }

        /// Advance the flight and draw it
        fn step(&mut self, time: f64) -> Frame {
            let frame = self
                .session
                .as_mut()
                .map_or(Frame::Idle, |session| sim::tick(session, time));
            if let Some(rocket) = self.rocket.as_mut() {
                rocket.present(frame);
            }
            frame
        }

        fn spawn_overlay(&mut self, overlay: Overlay) -> Result<(), JsValue> {
            if self.session.is_none() {
                return Ok(());
            }
            let board = dom::board_placement(&self.board_canvas, GRID_SIZE);
            let document = dom::document()?;
            let view = DomOverlay::create(&document, &overlay, &board, &self.settings.assets.miss_image)?;
            self.overlays.insert(overlay, view);
            Ok(())
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Battleshot starting...");

        let settings = Settings::load();
        let audio = AudioManager::new(&settings);

        let board_canvas: HtmlCanvasElement = dom::element_by_id("battleship-canvas")?;
        let rocket_canvas: HtmlCanvasElement = dom::element_by_id("rocket-canvas")?;

        let game = Rc::new(RefCell::new(Game {
            audio,
            betting_screen: dom::element_by_id("betting-screen")?,
            game_screen: dom::element_by_id("game-screen")?,
            message: dom::element_by_id("game-message")?,
            board_surface: CanvasSurface::new(board_canvas.clone())?,
            board_canvas: board_canvas.clone(),
            rocket_surface: Some(CanvasSurface::new(rocket_canvas)?),
            rocket: None,
            session: None,
            overlays: OverlayTracker::new(),
            settings,
        }));

        setup_wager(game.borrow().settings.wager_step)?;
        setup_start_button(game.clone())?;
        setup_board_click(&board_canvas, game)?;

        log::info!("Battleshot ready");
        Ok(())
    }

    fn setup_wager(step: u64) -> Result<(), JsValue> {
        let input: HtmlInputElement = dom::query(".input-field")?;

        {
            let input = input.clone();
            let plus: Element = dom::query(".plus")?;
            dom::on_click(&plus, move |_event: MouseEvent| {
                let wager = Wager::parse(&input.value()).increment(step);
                input.set_value(&wager.to_string());
            })?;
        }

        {
            let minus: Element = dom::query(".minus")?;
            dom::on_click(&minus, move |_event: MouseEvent| {
                let current = Wager::parse(&input.value());
                if current.amount > 0 {
                    input.set_value(&current.decrement(step).to_string());
                }
            })?;
        }

        Ok(())
    }

    fn setup_start_button(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let button: Element = dom::query(".start-button")?;
        dom::on_click(&button, move |_event: MouseEvent| {
            if let Err(e) = game.borrow_mut().start_session() {
                log::error!("Could not start session: {:?}", e);
            }
        })
    }

    fn setup_board_click(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        dom::on_click(canvas, move |event: MouseEvent| {
            let pointer = DVec2::new(event.client_x() as f64, event.client_y() as f64);
            let fired = {
                let mut g = game.borrow_mut();
                let board = dom::board_placement(&g.board_canvas, GRID_SIZE);
                g.session
                    .as_mut()
                    .and_then(|session| sim::fire(session, board, pointer))
                    .is_some()
            };
            if fired {
                dispatch_events(&game);
            }
        })
    }

    /// Apply pending simulation events to the page
    fn dispatch_events(game: &Rc<RefCell<Game>>) {
        let events = match game.borrow_mut().session.as_mut() {
            Some(session) => session.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                GameEvent::PlaySound(SoundCue::Rocket) => launch(game.clone()),
                GameEvent::PlaySound(cue) => game.borrow().audio.play_detached(cue),
                GameEvent::ShowMessage(text) => {
                    game.borrow().message.set_text_content(Some(text));
                }
                GameEvent::ClearRocket => {
                    if let Some(rocket) = game.borrow_mut().rocket.as_mut() {
                        rocket.clear();
                    }
                }
                GameEvent::SpawnOverlay(overlay) => {
                    if let Err(e) = game.borrow_mut().spawn_overlay(overlay) {
                        log::error!("Could not show overlay: {:?}", e);
                        continue;
                    }
                    schedule_overlay(game, &overlay);
                }
            }
        }
    }

    /// Rocket sound, then sprite, then flight
    fn launch(game: Rc<RefCell<Game>>) {
        let (playback, sprite_src) = {
            let g = game.borrow();
            (
                g.audio.play(SoundCue::Rocket),
                g.settings.assets.rocket_sprite.clone(),
            )
        };

        wasm_bindgen_futures::spawn_local(async move {
            audio::settle(SoundCue::Rocket, playback.await);

            let needs_sprite = game.borrow().rocket.is_none();
            if needs_sprite {
                match timer::load_image(&sprite_src).await {
                    Ok(sprite) => {
                        let mut g = game.borrow_mut();
                        if let Some(surface) = g.rocket_surface.take() {
                            g.rocket = Some(RocketRenderer::new(surface, sprite));
                        }
                    }
                    Err(e) => log::error!("Rocket sprite failed to load: {:?}", e),
                }
            }

            let started = game.borrow_mut().begin_flight();
            match started {
                Ok(true) => request_frame(game),
                Ok(false) => log::warn!("Launch requested with no shot pending"),
                Err(e) => log::error!("Could not start flight: {:?}", e),
            }
        });
    }

    fn request_frame(game: Rc<RefCell<Game>>) {
        if let Err(e) = timer::request_animation_frame(move |time: f64| game_loop(game, time)) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let frame = game.borrow_mut().step(time);
        dispatch_events(&game);

        if let Frame::Rocket(_) = frame {
            request_frame(game);
        }
    }

    /// Timers for each phase change of a new overlay
    fn schedule_overlay(game: &Rc<RefCell<Game>>, overlay: &Overlay) {
        let now = timer::now().unwrap_or(overlay.created_at);
        for deadline in overlay.fade_at().into_iter().chain([overlay.destroy_at()]) {
            let game = game.clone();
            let scheduled = timer::set_timeout(deadline - now, move || {
                // Never evaluate before the deadline this timer was set for
                let now = timer::now().unwrap_or(deadline).max(deadline);
                game.borrow_mut().overlays.advance(now);
            });
            if let Err(e) = scheduled {
                log::error!("Could not schedule overlay timer: {:?}", e);
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Battleshot (native) starting...");
    log::info!("Native mode has no page to draw on - run with `trunk serve` for the web version");

    println!("\nPlaying a headless session...");
    headless_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// One full session without a browser: click, fly, land, let overlays expire
#[cfg(not(target_arch = "wasm32"))]
fn headless_session() {
    use battleshot::consts::{BOARD_PIXELS, GRID_SIZE};
    use battleshot::sim::{
        self, BoardPlacement, Cell, Frame, GameEvent, OverlayPhase, OverlayTracker, OverlayView,
        Session, Viewport,
    };
    use glam::DVec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    struct LoggedOverlay(u32);

    impl OverlayView for LoggedOverlay {
        fn enter_phase(&mut self, phase: OverlayPhase) {
            println!("  overlay {} -> {:?}", self.0, phase);
        }
    }

    impl Drop for LoggedOverlay {
        fn drop(&mut self) {
            println!("  overlay {} removed", self.0);
        }
    }

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let board = BoardPlacement::new(DVec2::new(440.0, 160.0), BOARD_PIXELS / GRID_SIZE as f64);
    let viewport = Viewport::new(1280.0, 720.0);

    let mut session = match Session::new(seed, board) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Could not start session: {}", e);
            return;
        }
    };

    let mut picker = Pcg32::seed_from_u64(seed ^ 0x5eed);
    let aim = Cell::new(
        picker.random_range(0..GRID_SIZE),
        picker.random_range(0..GRID_SIZE),
    );
    let click = board.cell_center(aim);
    println!("Seed {}: clicking {:?} (cell {:?})", seed, click, aim);

    if sim::fire(&mut session, board, click).is_none()
        || !sim::begin_flight(&mut session, board, &viewport, 0.0)
    {
        log::error!("Session refused the shot");
        return;
    }

    let frame_ms = 1000.0 / 60.0;
    let mut now = 0.0;
    let mut frames = 0;
    let outcome = loop {
        match sim::tick(&mut session, now) {
            Frame::Rocket(_) => frames += 1,
            Frame::Landed(outcome) => break outcome,
            Frame::Idle => {
                log::error!("Flight stalled");
                return;
            }
        }
        now += frame_ms;
    };
    println!("Landed after {} frames ({:.0} ms): {:?}", frames, now, outcome);

    let mut overlays = OverlayTracker::new();
    for event in session.drain_events() {
        match event {
            GameEvent::ShowMessage(text) => println!("  \"{}\"", text),
            GameEvent::PlaySound(cue) => println!("  sound: {}", cue.as_str()),
            GameEvent::SpawnOverlay(overlay) => {
                overlays.insert(overlay, LoggedOverlay(overlay.id))
            }
            GameEvent::ClearRocket => {}
        }
    }

    while let Some(deadline) = overlays.next_deadline(now) {
        now = deadline;
        overlays.advance(now);
    }
    println!("✓ Session finished at {:.0} ms", now);
}
