use docx_template_gen::{generate, init_logging, project_root, DocxTemplate, WelcomeLetter};

fn main() {
    init_logging();

    match generate(&WelcomeLetter, project_root()) {
        Ok(generated) => println!("{}", WelcomeLetter.summary(&generated.path)),
        Err(e) => {
            eprintln!("Failed to create welcome template: {e}");
            std::process::exit(1);
        }
    }
}
