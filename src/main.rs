use iced::Size;
use segmenty::config::AppConfig;
use segmenty::gui::App;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let app_config = AppConfig::load();
    let boot_config = app_config.clone();

    let icon_font = if app_config.control.is_icon {
        let icon_type = app_config.control.icon_type;
        let font = icon_type.load_system_font();
        if font.is_none() {
            tracing::warn!(family = icon_type.family(), "icon font not installed");
        }
        font
    } else {
        None
    };

    let mut application = iced::application(
        move || (App::new(boot_config.clone()), iced::Task::none()),
        App::update,
        App::view,
    )
    .title("Segmenty")
    .theme(iced::Theme::Light)
    .subscription(App::subscription)
    .window(iced::window::Settings {
        size: Size::new(app_config.ui.window_width, app_config.ui.window_height),
        ..Default::default()
    });

    if let Some(bytes) = icon_font {
        application = application.font(bytes);
    }

    application.run()
}
