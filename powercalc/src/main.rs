//! PowerCalc entry point

use eframe::NativeOptions;
use powercalc::PowerCalcApp;
use powercore::CalcConfig;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = CalcConfig::load();
    log::info!("starting, division by zero -> {:?}", config.zero_division);

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 540.0])
            .with_title("PowerCalc"),
        ..Default::default()
    };

    eframe::run_native(
        "PowerCalc",
        options,
        Box::new(move |cc| Box::new(PowerCalcApp::new(cc, &config))),
    )
}
