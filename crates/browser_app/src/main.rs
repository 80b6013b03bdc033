fn main() -> anyhow::Result<()> {
    browser_app::run_app()
}
