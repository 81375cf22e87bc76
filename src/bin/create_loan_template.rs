use docx_template_gen::{generate, init_logging, project_root, DocxTemplate, LoanApplicationSummary};

fn main() {
    init_logging();

    let template = LoanApplicationSummary::today();
    match generate(&template, project_root()) {
        Ok(generated) => println!("{}", template.summary(&generated.path)),
        Err(e) => {
            eprintln!("Failed to create loan template: {e}");
            std::process::exit(1);
        }
    }
}
