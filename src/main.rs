fn main() -> anyhow::Result<()> {
    eye_dashboard_lib::run()
}
