//! Desktop build: preferences and the access token live in
//! `<data_dir>/notes-app/preferences.toml`, and `<config_dir>/notes-app/config.toml`
//! can point the client at another API.

fn main() {
    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, WindowBuilder};

        dioxus::LaunchBuilder::desktop()
            .with_cfg(Config::new().with_window(WindowBuilder::new().with_title("Note App")))
            .launch(ui::App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(ui::App);
    }
}
