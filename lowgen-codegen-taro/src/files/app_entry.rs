//! app.tsx entry component.

use lowgen_core::GeneratedFile;

use crate::{
    CodeFile, RawCode,
    ast::Import,
};

/// Root component of the application.
///
/// Pages render as its children. The global stylesheet is imported only
/// when the project declares global styles.
#[derive(Debug, Clone, Copy)]
pub struct AppEntry {
    pub global_styles: bool,
}

impl AppEntry {
    pub fn new(global_styles: bool) -> Self {
        Self { global_styles }
    }
}

impl GeneratedFile for AppEntry {
    fn path(&self) -> String {
        "app.tsx".to_string()
    }

    fn render(&self) -> String {
        let mut file = CodeFile::new().import(Import::new("react").named("PropsWithChildren"));
        if self.global_styles {
            file = file.import(Import::new("./app.scss"));
        }
        file.add(RawCode::new(
            "function App({ children }: PropsWithChildren) {\n  return children;\n}",
        ))
        .add(RawCode::new("export default App;"))
        .render()
    }
}
