use std::error::Error;

use allocation_task::events::CustomCursor;
use allocation_task::headful::host::TaskHost;
use allocation_task::headful::input_adapter::InputAdapter;
use allocation_task::settings::{SettingsStore, TaskSettings};
use engine::app::{AppConfig, AppContext, AppHandler, run_app};
use tracing_subscriber::EnvFilter;
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::ControlFlow;
use winit::window::CursorIcon;

const DEFAULT_LOG_FILTER: &str = "allocation_task=info,engine=info";

struct TaskApp {
    host: TaskHost,
    input: InputAdapter,
    cursor: CustomCursor,
}

impl TaskApp {
    fn apply_cursor(&mut self, ctx: &AppContext) {
        let cursor = self.host.cursor();
        if cursor == self.cursor {
            return;
        }
        self.cursor = cursor;
        ctx.window.set_cursor_icon(match cursor {
            CustomCursor::Point => CursorIcon::Hand,
            CustomCursor::Arrow => CursorIcon::Default,
        });
    }
}

impl AppHandler for TaskApp {
    fn handle_event(
        &mut self,
        event: Event<()>,
        control_flow: &mut ControlFlow,
        ctx: &mut AppContext,
    ) {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(size) => ctx.resize(size),
                other => {
                    if let Some(screen_event) = self.input.translate(&other) {
                        self.host.dispatch(screen_event);
                        self.apply_cursor(ctx);
                        ctx.window.request_redraw();
                    }
                }
            },
            Event::RedrawRequested(_) => {
                let host = &mut self.host;
                ctx.renderer.draw_frame(|gfx| host.render(gfx));
                if let Err(err) = ctx.renderer.present() {
                    tracing::error!(%err, "present failed");
                }
            }
            _ => {}
        }

        if self.host.should_quit() {
            *control_flow = ControlFlow::Exit;
        }
    }
}

fn load_settings() -> TaskSettings {
    let store = SettingsStore::from_env();
    match store.load() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(%err, "using default settings");
            TaskSettings::default()
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let settings = load_settings();
    let host = match TaskHost::from_settings(&settings) {
        Ok(host) => host,
        Err(err) => {
            tracing::warn!(%err, "custom catalog rejected, using the built-in one");
            TaskHost::from_settings(&TaskSettings {
                catalog: None,
                ..settings.clone()
            })?
        }
    };
    tracing::info!(round = host.view().round(), "allocation task starting");

    let config = AppConfig {
        title: "Resource Allocation".to_string(),
        desired_size: PhysicalSize::new(settings.screen.width, settings.screen.height),
        clamp_to_monitor: true,
        vsync: Some(true),
    };
    run_app(
        config,
        TaskApp {
            host,
            input: InputAdapter::default(),
            cursor: CustomCursor::Arrow,
        },
    )
}
