fn main() {
    dioxus::launch(portfolio_app::app::App);
}
