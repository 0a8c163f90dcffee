use std::{sync::Arc, time::Duration};

use anyhow::Context;
use pixels::{Pixels, PixelsBuilder, SurfaceTexture, wgpu::TextureFormat};
use tracing::error;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{Key, NamedKey},
    window::{Window, WindowAttributes, WindowId},
};

use super::{frame::RenderFrame, pacer::FramePacer};

pub(super) struct RendererWindow {
    config: RendererWindowConfig,
    resumed_window: Option<ResumedWindow>,
    pacer: FramePacer,
    error: Option<anyhow::Error>,
}

impl RendererWindow {
    pub fn new(config: RendererWindowConfig) -> Self {
        let pacer = {
            let target_frame_time = Duration::from_micros(1_000_000 / config.target_fps.max(1));
            FramePacer::new(target_frame_time)
        };

        Self {
            config,
            resumed_window: None,
            pacer,
            error: None,
        }
    }

    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, e: anyhow::Error) {
        error!(error = %format!("{e:#}"), "renderer failed");
        self.error = Some(e);
        event_loop.exit();
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> anyhow::Result<ResumedWindow> {
        let window = Arc::new({
            let window_size = LogicalSize::new(self.config.width, self.config.height);

            event_loop
                .create_window(
                    WindowAttributes::default()
                        .with_title(self.config.title.clone())
                        .with_inner_size(window_size),
                )
                .context("Creating window")?
        });

        let pixels = {
            let window_size = window.inner_size();

            let surface_texture =
                SurfaceTexture::new(window_size.width, window_size.height, window.clone());

            PixelsBuilder::new(window_size.width, window_size.height, surface_texture)
                .texture_format(TextureFormat::Rgba8UnormSrgb)
                .build()
                .context("Creating pixels buffer")?
        };

        window.request_redraw();

        Ok(ResumedWindow {
            window,
            pixels,
            title: self.config.title.clone(),
        })
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let Some(ResumedWindow { window, pixels, title }) = self.resumed_window.as_mut() else {
            return Ok(());
        };

        let PhysicalSize { width, height } = window.inner_size();

        if width > 0 && height > 0 {
            let next_frame = RenderFrame {
                width,
                height,
                buffer: pixels.frame_mut(),
            };

            (self.config.draw_callback)(next_frame);

            pixels.render().context("Rendering with pixels")?;
        }

        if let Some(title_callback) = &mut self.config.title_callback {
            let next_title = title_callback();

            if *title != next_title {
                window.set_title(&next_title);
                *title = next_title;
            }
        }

        // FIXME: Pacing here blocks the event loop, so resizes are handled a frame late.
        self.pacer.wait();
        window.request_redraw();

        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> anyhow::Result<()> {
        let Some(ResumedWindow { window, pixels, .. }) = self.resumed_window.as_mut() else {
            return Ok(());
        };

        // Minimized windows report a zero size, which pixels rejects.
        if width == 0 || height == 0 {
            return Ok(());
        }

        pixels
            .resize_surface(width, height)
            .context("Resizing surface")?;
        pixels
            .resize_buffer(width, height)
            .context("Resizing buffer")?;
        window.request_redraw();

        Ok(())
    }
}

pub struct RendererWindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub target_fps: u64,
    pub draw_callback: Box<dyn FnMut(RenderFrame)>,
    pub title_callback: Option<Box<dyn FnMut() -> String>>,
    pub event_callback: Option<Box<dyn FnMut(&WindowEvent)>>,
}

struct ResumedWindow {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    title: String,
}

impl ApplicationHandler for RendererWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.resumed_window.is_some() {
            return;
        }

        match self.create_window(event_loop) {
            Ok(resumed_window) => self.resumed_window = Some(resumed_window),
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let result = match &event {
            WindowEvent::RedrawRequested => self.redraw(),
            WindowEvent::Resized(PhysicalSize { width, height }) => self.resize(*width, *height),
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                event_loop.exit();
                Ok(())
            }
            _ => Ok(()),
        };

        if let Err(e) = result {
            self.fail(event_loop, e);
            return;
        }

        if let Some(event_callback) = &mut self.config.event_callback {
            event_callback(&event);
        }
    }
}
