use crate::icon::IconImage;
use crate::launcher;
use crate::resolver::ExecutablePath;
use log::{debug, error, info};
use std::sync::Arc;
use tao::event::{Event, StartCause};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tray_icon::{
    menu::{Menu, MenuEvent, MenuId, MenuItem, PredefinedMenuItem},
    MouseButton, MouseButtonState, TrayIcon, TrayIconBuilder, TrayIconEvent,
};

const OPEN_ID: &str = "open";
const QUIT_ID: &str = "quit";
const TOOLTIP: &str = "Ente Auth";

#[derive(Debug)]
pub enum UserEvent {
    TrayIconEvent(TrayIconEvent),
    MenuEvent(MenuEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayAction {
    Open,
    Quit,
}

impl TrayAction {
    pub fn from_menu_id(id: &MenuId) -> Option<Self> {
        match id.as_ref() {
            OPEN_ID => Some(Self::Open),
            QUIT_ID => Some(Self::Quit),
            _ => None,
        }
    }

    /// A left click on the icon itself acts like the default menu item.
    pub fn from_tray_event(event: &TrayIconEvent) -> Option<Self> {
        match event {
            TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } => Some(Self::Open),
            _ => None,
        }
    }
}

pub struct TrayApplication {
    tray_icon: Option<TrayIcon>,
    executable: Arc<ExecutablePath>,
}

impl TrayApplication {
    pub fn new(executable: Arc<ExecutablePath>) -> Self {
        Self {
            tray_icon: None,
            executable,
        }
    }

    fn new_tray_icon(&self) -> Result<TrayIcon, Box<dyn std::error::Error>> {
        let menu = Self::new_tray_menu()?;
        let icon = IconImage::load().into_tray_icon()?;

        let tray_icon = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_menu_on_left_click(false)
            .with_tooltip(TOOLTIP)
            .with_icon(icon)
            .build()?;

        Ok(tray_icon)
    }

    fn new_tray_menu() -> Result<Menu, Box<dyn std::error::Error>> {
        let menu = Menu::new();
        menu.append(&MenuItem::with_id(OPEN_ID, "Open Ente Auth", true, None))?;
        menu.append(&PredefinedMenuItem::separator())?;
        menu.append(&MenuItem::with_id(QUIT_ID, "Quit", true, None))?;
        Ok(menu)
    }

    fn init(&mut self) {
        match self.new_tray_icon() {
            Ok(icon) => {
                info!("Tray icon ready");
                self.tray_icon = Some(icon);
            }
            Err(err) => error!("Failed to create tray icon: {}", err),
        }
    }

    fn handle(&self, action: TrayAction, control_flow: &mut ControlFlow) {
        match action {
            TrayAction::Open => {
                let _ = launcher::launch_logged(&self.executable);
            }
            TrayAction::Quit => {
                info!("Quit requested from tray");
                *control_flow = ControlFlow::Exit;
            }
        }
    }

    fn user_event(&self, event: UserEvent, control_flow: &mut ControlFlow) {
        let action = match &event {
            UserEvent::TrayIconEvent(e) => TrayAction::from_tray_event(e),
            UserEvent::MenuEvent(e) => TrayAction::from_menu_id(&e.id),
        };
        debug!("Tray event: {:?} -> {:?}", event, action);
        if let Some(action) = action {
            self.handle(action, control_flow);
        }
    }
}

/// Occupies the calling (main) thread until "Quit", then exits the process with 0.
pub fn run_tray_application(executable: Arc<ExecutablePath>) -> ! {
    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();

    let proxy = event_loop.create_proxy();
    TrayIconEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(UserEvent::TrayIconEvent(event));
    }));

    let proxy = event_loop.create_proxy();
    MenuEvent::set_event_handler(Some(move |event| {
        let _ = proxy.send_event(UserEvent::MenuEvent(event));
    }));

    let mut app = TrayApplication::new(executable);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::NewEvents(StartCause::Init) => app.init(),
            Event::UserEvent(event) => app.user_event(event, control_flow),
            Event::LoopDestroyed => {
                app.tray_icon.take();
                info!("Tray closed");
            }
            _ => {}
        }
    })
}
