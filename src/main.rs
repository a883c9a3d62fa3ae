fn main() -> anyhow::Result<()> {
    vibe_clock_lib::run()
}
