// app.rs - Sandbox state: an editor or a life playback bound to one GridView

use conway::{Automaton, CellGrid, Editor, PATTERNS, PaintSession, StateHistory};
use egui::Pos2;
use grid_display::{GridView, PixelSurface};
use log::{debug, error, info, warn};
use std::path::PathBuf;
use std::time::Instant;

use crate::colorizer::Colorizer;
use crate::playback::Playback;
use crate::settings::{ModeKind, Settings};

pub enum Mode {
    Editor {
        editor: Editor,
        /// Drag in progress, if the pointer is held down on the grid.
        session: Option<PaintSession>,
    },
    Life {
        history: StateHistory,
    },
}

pub struct SandboxApp {
    pub mode: Mode,
    pub view: GridView<PixelSurface>,
    pub playback: Playback,
    pub colorizer: Colorizer,
    pub settings: Settings,
    /// Where settings are written on change; `None` keeps them in memory.
    settings_path: Option<PathBuf>,
    pub selected_pattern: usize,
    /// Pending values of the editor's resize inputs.
    pub resize_to: (usize, usize),
    pub zoom: f32,
    pub texture: Option<egui::TextureHandle>,
    /// Set when the surface changed since the texture was last uploaded.
    pub dirty: bool,
}

impl SandboxApp {
    pub fn new(settings: Settings, settings_path: Option<PathBuf>) -> Self {
        let (m, n) = settings.dimensions;
        let mode = match settings.last_mode {
            ModeKind::Editor => Mode::Editor {
                editor: Editor::new(m, n),
                session: None,
            },
            ModeKind::Life => Mode::Life {
                history: StateHistory::new(Automaton::random(m, settings.rule)),
            },
        };
        let playback = Playback::new(settings.speed).unwrap_or_else(|e| {
            warn!("{:#}; using the default speed", e);
            Playback::default()
        });
        let (w, h) = settings.surface_size;
        let view = GridView::new(m, n, PixelSurface::new(w, h), settings.grid_lines);

        let mut app = Self {
            mode,
            view,
            playback,
            colorizer: Colorizer::monochrome(settings.invert_colors),
            settings_path,
            selected_pattern: 0,
            resize_to: (m, n),
            zoom: 1.0,
            texture: None,
            dirty: true,
            settings,
        };
        app.redraw();
        app
    }

    pub fn grid(&self) -> &CellGrid<bool> {
        match &self.mode {
            Mode::Editor { editor, .. } => editor.grid(),
            Mode::Life { history } => history.current().grid(),
        }
    }

    pub fn mode_kind(&self) -> ModeKind {
        match self.mode {
            Mode::Editor { .. } => ModeKind::Editor,
            Mode::Life { .. } => ModeKind::Life,
        }
    }

    pub fn history(&self) -> Option<&StateHistory> {
        match &self.mode {
            Mode::Life { history } => Some(history),
            Mode::Editor { .. } => None,
        }
    }

    /// Colorizes the current grid and paints it, rebinding the view first if
    /// the grid changed shape.
    pub fn redraw(&mut self) {
        let grid = self.grid();
        let dimensions = grid.dimensions();
        let matrix = self.colorizer.colorize(grid);
        if self.view.dimensions() != dimensions {
            self.rebind(dimensions);
        }
        if let Err(e) = self.view.render(matrix) {
            error!("render failed: {}", e);
        }
        self.dirty = true;
    }

    /// Rebinds the view to new dimensions at the unzoomed surface size, then
    /// reapplies the current zoom so the slider stays absolute.
    fn rebind(&mut self, (m, n): (usize, usize)) {
        if let Err(e) = self.view.set_scale(1.0) {
            error!("could not unzoom before rebinding: {}", e);
        }
        self.view.reinit(m, n);
        if let Err(e) = self.view.set_scale(self.zoom) {
            error!("could not restore zoom {}: {}", self.zoom, e);
        }
    }

    // -- Life --

    pub fn step_forward(&mut self) {
        self.playback.stop();
        self.advance();
    }

    pub fn step_back(&mut self) {
        self.playback.stop();
        if let Mode::Life { history } = &mut self.mode {
            history.retreat();
            self.redraw();
        }
    }

    pub fn reset(&mut self) {
        self.playback.stop();
        if let Mode::Life { history } = &mut self.mode {
            history.reset();
            self.redraw();
        }
    }

    /// Jumps to a generation, computing any missing ones.
    pub fn go_to(&mut self, index: usize) {
        self.playback.stop();
        if let Mode::Life { history } = &mut self.mode {
            if let Err(e) = history.go_to(index) {
                warn!("{}", e);
                return;
            }
            self.redraw();
        }
    }

    pub fn toggle_playback(&mut self, now: Instant) {
        if matches!(self.mode, Mode::Life { .. }) {
            self.playback.toggle(now);
        }
    }

    /// Advances one generation if playback says one is due.
    pub fn tick(&mut self, now: Instant) {
        if self.playback.tick(now) {
            self.advance();
        }
    }

    fn advance(&mut self) {
        if let Mode::Life { history } = &mut self.mode {
            history.advance();
            self.redraw();
        }
    }

    pub fn new_random(&mut self) {
        let size = self.settings.dimensions.0;
        self.start_life(Automaton::random(size, self.settings.rule));
    }

    /// Opens the current generation in the editor.
    pub fn edit_current(&mut self) {
        let Mode::Life { history } = &self.mode else {
            return;
        };
        let editor = Editor::from_automaton(history.current());
        info!("editing generation {}", history.position());
        self.playback.stop();
        self.mode = Mode::Editor {
            editor,
            session: None,
        };
        self.redraw();
        self.persist();
    }

    // -- Editor --

    /// Seeds a new history from the drawing.
    pub fn run_editor(&mut self) {
        let Mode::Editor { editor, .. } = &self.mode else {
            return;
        };
        let seed = editor.seed(self.settings.rule);
        self.start_life(seed);
    }

    pub fn clear_editor(&mut self) {
        if let Mode::Editor { editor, session } = &mut self.mode {
            *session = None;
            editor.clear();
            self.redraw();
        }
    }

    pub fn apply_pattern(&mut self, index: usize) {
        let Some(pattern) = PATTERNS.get(index) else {
            warn!("no pattern #{}", index);
            return;
        };
        if let Mode::Editor { editor, session } = &mut self.mode {
            let (m, n) = editor.dimensions();
            *editor = Editor::with_initial(&pattern.centered(m, n), m, n);
            *session = None;
            debug!("applied {}", pattern.name);
            self.redraw();
        }
    }

    pub fn resize_editor(&mut self, m: usize, n: usize) {
        if let Mode::Editor { editor, session } = &mut self.mode {
            *session = None;
            editor.resize(m, n);
            self.settings.dimensions = editor.dimensions();
            self.redraw();
            self.persist();
        }
    }

    /// Feeds the pointer into the paint session. `pressed` is the pointer
    /// position while the primary button is held on the grid, `None` once it
    /// is released.
    pub fn pointer(&mut self, pressed: Option<Pos2>) {
        let cell = pressed.and_then(|pos| self.view.cell_from_point(pos));
        let Mode::Editor { editor, session } = &mut self.mode else {
            return;
        };
        if pressed.is_none() {
            if let Some(done) = session.take() {
                debug!("painted {} cells", done.end());
            }
            return;
        }
        let Some(cell) = cell else {
            return;
        };
        if let Some(active) = session.as_mut() {
            active.continue_to(editor, cell);
        } else {
            *session = editor.begin(cell);
        }
        self.redraw();
    }

    // -- Shared --

    pub fn set_speed(&mut self, speed: f32) {
        if let Err(e) = self.playback.set_speed(speed) {
            warn!("{:#}", e);
            return;
        }
        self.persist();
    }

    pub fn set_grid_lines(&mut self, grid_lines: bool) {
        self.view.set_grid_lines(grid_lines);
        self.dirty = true;
        self.persist();
    }

    pub fn set_invert(&mut self, invert: bool) {
        self.colorizer.invert = invert;
        self.redraw();
        self.persist();
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        match self.view.set_scale(zoom) {
            Ok(()) => {
                self.zoom = zoom;
                self.dirty = true;
            }
            Err(e) => warn!("{}", e),
        }
    }

    fn start_life(&mut self, seed: Automaton) {
        info!(
            "starting life on {}x{} grid, {} alive",
            seed.dimensions().0,
            seed.dimensions().1,
            seed.population()
        );
        self.playback.stop();
        self.mode = Mode::Life {
            history: StateHistory::new(seed),
        };
        self.redraw();
        self.persist();
    }

    /// Copies the live state into the settings and writes them out.
    fn persist(&mut self) {
        self.settings.last_mode = self.mode_kind();
        self.settings.speed = self.playback.speed();
        self.settings.grid_lines = self.view.grid_lines();
        self.settings.invert_colors = self.colorizer.invert;
        if let Some(path) = &self.settings_path {
            if let Err(e) = self.settings.save_to(path) {
                warn!("could not save settings: {:#}", e);
            }
        }
    }
}
