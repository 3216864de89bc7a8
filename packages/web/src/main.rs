//! Browser build: preferences and the access token live in `localStorage`.

fn main() {
    dioxus::launch(ui::App);
}
