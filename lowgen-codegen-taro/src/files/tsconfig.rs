//! tsconfig.json generator.

use lowgen_core::GeneratedFile;

/// TypeScript compiler settings for a Taro project.
pub struct TsConfig;

impl GeneratedFile for TsConfig {
    fn path(&self) -> String {
        "tsconfig.json".to_string()
    }

    fn render(&self) -> String {
        r#"{
  "compilerOptions": {
    "target": "es2017",
    "module": "commonjs",
    "removeComments": false,
    "preserveConstEnums": true,
    "moduleResolution": "node",
    "experimentalDecorators": true,
    "noImplicitAny": false,
    "allowSyntheticDefaultImports": true,
    "outDir": "lib",
    "noUnusedLocals": true,
    "noUnusedParameters": true,
    "strictNullChecks": true,
    "sourceMap": true,
    "rootDir": ".",
    "jsx": "react-jsx",
    "allowJs": true,
    "resolveJsonModule": true,
    "typeRoots": ["node_modules/@types"]
  },
  "include": ["./pages", "./app.config.ts", "./types"],
  "compileOnSave": false
}
"#
        .to_string()
    }
}
