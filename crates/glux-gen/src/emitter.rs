//! Java source emission for the generated `Font` class.
//!
//! The unit is modelled as constants plus [`JavaMethod`]s referencing
//! [`JavaType`]s, so imports fall out of the model instead of being hand-listed.
//! Rendering is deterministic: sorted imports, fixed member order, two-space
//! indentation and a trailing newline.

use glux_core::config::{OutputConfig, SetupMode};
use glux_core::java;
use glux_core::model::{FontAsset, GenerationRequest};
use std::collections::BTreeSet;
use std::path::PathBuf;

const HEADER: &str = "// Generated by glux. Do not edit.";
const INDENT: &str = "  ";

/// A class referenced by the generated code.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct JavaType {
    pub package: String,
    pub simple_name: String,
}

impl JavaType {
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            simple_name: simple_name.into(),
        }
    }

    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.package, self.simple_name)
    }

    pub fn string() -> Self {
        Self::new("java.lang", "String")
    }
    pub fn context() -> Self {
        Self::new("android.content", "Context")
    }
    pub fn typeface() -> Self {
        Self::new("android.graphics", "Typeface")
    }
    pub fn view_pump() -> Self {
        Self::new("io.github.inflationx.viewpump", "ViewPump")
    }
    pub fn view_pump_context_wrapper() -> Self {
        Self::new("io.github.inflationx.viewpump", "ViewPumpContextWrapper")
    }
    pub fn calligraphy_interceptor() -> Self {
        Self::new("io.github.inflationx.calligraphy3", "CalligraphyInterceptor")
    }
    pub fn calligraphy_config() -> Self {
        Self::new("io.github.inflationx.calligraphy3", "CalligraphyConfig")
    }
}

/// A `public static` method of the generated class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaMethod {
    pub name: String,
    /// `None` renders as `void`.
    pub returns: Option<JavaType>,
    pub params: Vec<(JavaType, String)>,
    /// Statements without the trailing `;`.
    pub statements: Vec<String>,
    /// Types referenced only inside the body.
    pub body_types: Vec<JavaType>,
}

impl JavaMethod {
    fn referenced_types(&self) -> impl Iterator<Item = &JavaType> {
        self.returns
            .iter()
            .chain(self.params.iter().map(|(ty, _)| ty))
            .chain(self.body_types.iter())
    }

    fn render(&self, out: &mut String) {
        let returns = self
            .returns
            .as_ref()
            .map_or("void", |ty| ty.simple_name.as_str());
        let params = self
            .params
            .iter()
            .map(|(ty, name)| format!("{} {}", ty.simple_name, name))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "{INDENT}public static {returns} {}({params}) {{\n",
            self.name
        ));
        for statement in &self.statements {
            out.push_str(&format!("{INDENT}{INDENT}{statement};\n"));
        }
        out.push_str(&format!("{INDENT}}}\n"));
    }
}

/// `getTypeface(Context, String)`: load a typeface from the app's assets.
pub fn typeface_accessor() -> JavaMethod {
    JavaMethod {
        name: "getTypeface".to_string(),
        returns: Some(JavaType::typeface()),
        params: vec![
            (JavaType::context(), "context".to_string()),
            (JavaType::string(), "fontPath".to_string()),
        ],
        statements: vec![
            "return Typeface.createFromAsset(context.getAssets(), fontPath)".to_string(),
        ],
        body_types: Vec::new(),
    }
}

/// `setupFont(String)`: build the Calligraphy interceptor with the default font path.
///
/// The app's `R` class is referenced by its qualified name, since a font
/// constant named `R` would otherwise shadow it.
///
/// In [`SetupMode::Config`] the configured `ViewPump` is returned for the caller to
/// install; in [`SetupMode::Install`] it is installed globally via `ViewPump.init`.
pub fn setup_routine(mode: SetupMode, r_class: &JavaType, font_attr: &str) -> JavaMethod {
    let view_pump = format!(
        "ViewPump.builder().addInterceptor(new CalligraphyInterceptor(new CalligraphyConfig.Builder().setFontAttrId({}.attr.{}).setDefaultFontPath(fontDefaultPath).build())).build()",
        r_class.qualified_name(),
        font_attr
    );
    let (returns, statement) = match mode {
        SetupMode::Config => (Some(JavaType::view_pump()), format!("return {view_pump}")),
        SetupMode::Install => (None, format!("ViewPump.init({view_pump})")),
    };
    JavaMethod {
        name: "setupFont".to_string(),
        returns,
        params: vec![(JavaType::string(), "fontDefaultPath".to_string())],
        statements: vec![statement],
        body_types: vec![
            JavaType::view_pump(),
            JavaType::calligraphy_interceptor(),
            JavaType::calligraphy_config(),
        ],
    }
}

/// `fontWrapper(Context)`: wrap a context so the interceptor applies on inflation.
pub fn context_wrapper() -> JavaMethod {
    JavaMethod {
        name: "fontWrapper".to_string(),
        returns: Some(JavaType::context()),
        params: vec![(JavaType::context(), "context".to_string())],
        statements: vec!["return ViewPumpContextWrapper.wrap(context)".to_string()],
        body_types: vec![JavaType::view_pump_context_wrapper()],
    }
}

/// The single generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub package: String,
    pub class_name: String,
    pub constants: Vec<FontAsset>,
    pub methods: Vec<JavaMethod>,
}

impl GeneratedUnit {
    /// Assemble the unit for `request` from the parsed assets, in the given order.
    pub fn build(request: &GenerationRequest, assets: &[FontAsset], config: &OutputConfig) -> Self {
        let r_class = JavaType::new(request.package_name.clone(), "R");
        Self {
            package: request.target_package(&config.package_suffix),
            class_name: config.class_name.clone(),
            constants: assets.to_vec(),
            methods: vec![
                typeface_accessor(),
                setup_routine(config.setup, &r_class, &config.font_attr),
                context_wrapper(),
            ],
        }
    }

    /// Output path relative to the generated sources root.
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self.package.split('.').collect();
        path.push(format!("{}.java", self.class_name));
        path
    }

    /// Fully qualified imports, excluding `java.lang` and the unit's own package.
    pub fn imports(&self) -> BTreeSet<String> {
        let constant_types = (!self.constants.is_empty()).then(JavaType::string);
        constant_types
            .iter()
            .chain(self.methods.iter().flat_map(JavaMethod::referenced_types))
            .filter(|ty| ty.package != "java.lang" && ty.package != self.package)
            .map(JavaType::qualified_name)
            .collect()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(HEADER);
        out.push('\n');
        out.push_str(&format!("package {};\n\n", self.package));

        let imports = self.imports();
        if !imports.is_empty() {
            for import in &imports {
                out.push_str(&format!("import {import};\n"));
            }
            out.push('\n');
        }

        out.push_str(&format!("public final class {} {{\n", self.class_name));

        for constant in &self.constants {
            out.push_str(&format!(
                "{INDENT}public static final String {} = {};\n",
                constant.identifier,
                java::string_literal(&constant.asset_path)
            ));
        }

        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 || !self.constants.is_empty() {
                out.push('\n');
            }
            method.render(&mut out);
        }

        out.push_str("}\n");
        out
    }
}
