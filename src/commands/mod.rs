pub mod check;

pub use check::{
    OpenedInputs, OutputSettings, check_files, load_config, open_inputs, render_result, run_check,
    run_check_impl, write_result,
};
