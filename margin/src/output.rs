use margin_core::PresetStore;

pub fn print_info(message: &str) {
    println!("[Margin][INFO] {message}");
}

pub fn print_error(message: &str) {
    eprintln!("[Margin][ERROR]: {message}");
}

pub fn print_preset_list(store: &PresetStore) {
    print_info("Available presets:");
    for (idx, preset) in store.iter().enumerate() {
        let p = &preset.parameters;
        let marker = if idx == 0 { " (default)" } else { "" };
        println!(
            "{}{marker}: P_ab_pred={} P_prev_ab={} P_fn={} P_man={}",
            preset.name, p.p_ab_pred, p.p_prev_ab, p.p_fn, p.p_man
        );
    }
}
