mod renderthing;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use liblife::{CellState, Position};
use renderthing::{
    Renderer,
    frame::{Color, RenderFrame},
    window::RendererWindowConfig,
};
use tracing::warn;
use winit::{
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    keyboard::{Key, NamedKey},
};

use crate::{intent::Intent, state::State};

const TITLE: &str = "Conway's Game of Life";
const TARGET_FPS: u64 = 30;

const BORDER_COLOR: Color = [0, 0, 0, 255];
const ALIVE_COLOR: Color = [255, 192, 203, 255]; // pink
const DEAD_COLOR: Color = [255, 255, 255, 255];
const BORDER_WIDTH: u32 = 1;

pub fn run(state_arc: Arc<State>) -> anyhow::Result<()> {
    let (width, height) = state_arc.config.window_size();

    let renderer_state = RendererState {
        global_state: state_arc.clone(),
        mouse_cell: None,
        mouse_pressed: false,
        width: 0,
        height: 0,
    };

    let renderer_state_arc = Arc::new(Mutex::new(renderer_state));
    let draw_state_arc = renderer_state_arc.clone();
    let event_state_arc = renderer_state_arc.clone();

    let renderer = Renderer::new(RendererWindowConfig {
        title: title(&state_arc),
        width,
        height,
        target_fps: TARGET_FPS,
        draw_callback: Box::new(move |frame| {
            draw(&mut lock(&draw_state_arc), frame);
        }),
        title_callback: Some(Box::new(move || title(&state_arc))),
        event_callback: Some(Box::new(move |event| {
            on_event(&mut lock(&event_state_arc), event);
        })),
    })?;

    let result = renderer.run();
    lock(&renderer_state_arc).global_state.scheduler().stop();
    result
}

fn title(state: &State) -> String {
    format!("{TITLE} [{}]", state.run_state().label())
}

fn lock(state: &Mutex<RendererState>) -> MutexGuard<'_, RendererState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

fn draw(state: &mut RendererState, mut frame: RenderFrame) {
    state.width = frame.width;
    state.height = frame.height;

    let store = state.global_state.store();
    let grid = store.grid();

    let cell_width = frame.width / grid.cols() as u32;
    let cell_height = frame.height / grid.rows() as u32;

    frame.fill(BORDER_COLOR);

    for (pos, cell) in grid.enumerate_cells() {
        let cell_screen_x = pos.col as u32 * cell_width;
        let cell_screen_y = pos.row as u32 * cell_height;

        let color = match cell {
            CellState::Alive => ALIVE_COLOR,
            CellState::Dead => DEAD_COLOR,
        };

        frame.draw_rect(
            cell_screen_x + BORDER_WIDTH,
            cell_screen_y + BORDER_WIDTH,
            cell_width.saturating_sub(BORDER_WIDTH * 2),
            cell_height.saturating_sub(BORDER_WIDTH * 2),
            color,
        );
    }
}

fn on_event(state: &mut RendererState, event: &WindowEvent) {
    let intent = match event {
        WindowEvent::MouseInput {
            state: mouse_state,
            button: MouseButton::Left,
            ..
        } => {
            state.mouse_pressed = mouse_state.is_pressed();
            state.mouse_pressed.then_some(state.mouse_cell).flatten().map(Intent::ToggleCell)
        }
        WindowEvent::CursorMoved { position, .. } => {
            let prev_mouse_cell = state.mouse_cell;
            state.mouse_cell = state.cell_at(position.x, position.y);

            // Dragging paints each newly entered cell once.
            if state.mouse_pressed && prev_mouse_cell != state.mouse_cell {
                state.mouse_cell.map(Intent::ToggleCell)
            } else {
                None
            }
        }
        WindowEvent::CursorLeft { .. } => {
            state.mouse_cell = None;
            None
        }
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    logical_key,
                    state: ElementState::Pressed,
                    repeat: false,
                    ..
                },
            ..
        } => key_intent(logical_key),
        _ => None,
    };

    if let Some(intent) = intent
        && let Err(e) = intent.apply(&state.global_state)
    {
        warn!(error = %e, ?intent, "window intent failed");
    }
}

fn key_intent(key: &Key) -> Option<Intent> {
    match key {
        Key::Named(NamedKey::Space) => Some(Intent::ToggleRunning),
        Key::Character(c) => match c.as_str() {
            "r" | "R" => Some(Intent::Randomize),
            "c" | "C" => Some(Intent::Clear),
            "s" | "S" => Some(Intent::Step(1)),
            _ => None,
        },
        _ => None,
    }
}

struct RendererState {
    global_state: Arc<State>,
    mouse_cell: Option<Position>,
    mouse_pressed: bool,
    width: u32,
    height: u32,
}

impl RendererState {
    /// Maps a cursor position in physical pixels to the cell under it.
    fn cell_at(&self, x: f64, y: f64) -> Option<Position> {
        if self.width == 0 || self.height == 0 || x < 0.0 || y < 0.0 {
            return None;
        }

        let (rows, cols) = (self.global_state.config.rows, self.global_state.config.cols);

        let pos = Position {
            row: (y as u64 * rows as u64 / self.height as u64) as usize,
            col: (x as u64 * cols as u64 / self.width as u64) as usize,
        };

        (pos.row < rows && pos.col < cols).then_some(pos)
    }
}

#[cfg(test)]
mod tests {
    use liblife::LifeConfig;

    use super::*;

    fn renderer_state() -> RendererState {
        RendererState {
            global_state: Arc::new(State::new(LifeConfig::default()).unwrap()),
            mouse_cell: None,
            mouse_pressed: false,
            width: 400,
            height: 400,
        }
    }

    #[test]
    fn cursor_maps_to_cells() {
        let state = renderer_state();

        assert_eq!(state.cell_at(0.0, 0.0), Some(Position::new(0, 0)));
        assert_eq!(state.cell_at(45.0, 399.0), Some(Position::new(19, 2)));
        assert_eq!(state.cell_at(400.0, 10.0), None);
        assert_eq!(state.cell_at(-3.0, 10.0), None);
    }

    #[test]
    fn draw_colors_cells() {
        let mut state = renderer_state();
        state.global_state.store_mut().toggle((0, 1)).unwrap();

        let mut buffer = vec![0; 400 * 400 * 4];
        draw(
            &mut state,
            RenderFrame {
                width: 400,
                height: 400,
                buffer: &mut buffer,
            },
        );

        let pixel = |x: usize, y: usize| &buffer[(x + y * 400) * 4..(x + y * 400) * 4 + 4];

        assert_eq!(pixel(0, 0), &BORDER_COLOR);
        assert_eq!(pixel(10, 10), &DEAD_COLOR);
        assert_eq!(pixel(30, 10), &ALIVE_COLOR);
    }

    #[test]
    fn keys_map_to_intents() {
        assert_eq!(key_intent(&Key::Named(NamedKey::Space)), Some(Intent::ToggleRunning));
        assert_eq!(key_intent(&Key::Character("r".into())), Some(Intent::Randomize));
        assert_eq!(key_intent(&Key::Character("c".into())), Some(Intent::Clear));
        assert_eq!(key_intent(&Key::Character("s".into())), Some(Intent::Step(1)));
        assert_eq!(key_intent(&Key::Character("x".into())), None);
    }
}
