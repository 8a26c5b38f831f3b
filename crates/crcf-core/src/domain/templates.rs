//! Content templates: pure functions from a canonical component name to
//! unformatted source text.
//!
//! No template performs I/O; every function returns a string in the target
//! syntax (JavaScript or TypeScript). Selection between templates lives in
//! the [`selector`](crate::domain::selector) module, not here.

use crate::domain::{GenerationOptions, Language, Platform};
use crate::domain::selector::BodyTemplate;

/// Per-component index file: re-exports the component under one name.
///
/// The platform-specific module is resolved by the bundler (`.web` /
/// `.native` suffix resolution), so the import is suffix-free.
pub fn index(name: &str) -> String {
    format!("import {name} from './{name}';\n\nexport default {name};\n")
}

/// Combined top-level index re-exporting every requested component.
pub fn combined_index(names: &[String]) -> String {
    let mut out = String::new();
    for name in names {
        out.push_str(&format!("export {{ default as {name} }} from './{name}';\n"));
    }
    out
}

/// Component body file for one platform.
pub fn body(name: &str, platform: Platform, template: BodyTemplate, language: Language) -> String {
    match (language, platform) {
        (Language::JavaScript, Platform::Web) => js_web_body(name, template),
        (Language::JavaScript, Platform::Native) => js_native_body(name, template),
        (Language::TypeScript, Platform::Web) => ts_web_body(name, template),
        (Language::TypeScript, Platform::Native) => ts_native_body(name, template),
    }
}

/// Test file: one shape per platform, independent of state style and props.
pub fn test(name: &str, _platform: Platform, options: &GenerationOptions) -> String {
    match options.language {
        Language::JavaScript => format!(
            "import React from 'react';\n\
             import renderer from 'react-test-renderer';\n\
             \n\
             import {name} from '../{name}';\n\
             \n\
             describe('<{name} />', () => {{\n\
             \x20 it('renders correctly', () => {{\n\
             \x20   const tree = renderer.create(<{name} />).toJSON();\n\
             \x20   expect(tree).toMatchSnapshot();\n\
             \x20 }});\n\
             }});\n"
        ),
        Language::TypeScript => format!(
            "import * as React from 'react';\n\
             import * as renderer from 'react-test-renderer';\n\
             \n\
             import {name} from '../{name}';\n\
             \n\
             describe('<{name} />', () => {{\n\
             \x20 it('renders correctly', () => {{\n\
             \x20   const tree = renderer.create(<{name} />).toJSON();\n\
             \x20   expect(tree).toMatchSnapshot();\n\
             \x20 }});\n\
             }});\n"
        ),
    }
}

// ── JavaScript bodies ─────────────────────────────────────────────────────────

fn js_web_body(name: &str, template: BodyTemplate) -> String {
    match template {
        BodyTemplate::Stateful => format!(
            "import React, {{ Component }} from 'react';\n\
             \n\
             class {name} extends Component {{\n\
             \x20 render() {{\n\
             \x20   return <div>{name}</div>;\n\
             \x20 }}\n\
             }}\n\
             \n\
             export default {name};\n"
        ),
        BodyTemplate::StatefulWithProps => format!(
            "import React, {{ Component }} from 'react';\n\
             import PropTypes from 'prop-types';\n\
             \n\
             class {name} extends Component {{\n\
             \x20 render() {{\n\
             \x20   return <div>{name}</div>;\n\
             \x20 }}\n\
             }}\n\
             \n\
             {name}.propTypes = {{}};\n\
             \n\
             export default {name};\n"
        ),
        BodyTemplate::Functional => format!(
            "import React from 'react';\n\
             \n\
             const {name} = () => <div>{name}</div>;\n\
             \n\
             export default {name};\n"
        ),
        BodyTemplate::FunctionalWithProps => format!(
            "import React from 'react';\n\
             import PropTypes from 'prop-types';\n\
             \n\
             const {name} = props => <div>{name}</div>;\n\
             \n\
             {name}.propTypes = {{}};\n\
             \n\
             export default {name};\n"
        ),
    }
}

fn js_native_body(name: &str, template: BodyTemplate) -> String {
    // Native has no functional shape; the selector only ever hands us the
    // stateful variants here.
    let props_import = match template {
        BodyTemplate::StatefulWithProps | BodyTemplate::FunctionalWithProps => {
            "import PropTypes from 'prop-types';\n"
        }
        _ => "",
    };
    let props_decl = match template {
        BodyTemplate::StatefulWithProps | BodyTemplate::FunctionalWithProps => {
            format!("\n{name}.propTypes = {{}};\n")
        }
        _ => String::new(),
    };
    format!(
        "import React, {{ Component }} from 'react';\n\
         import {{ View, Text }} from 'react-native';\n\
         {props_import}\
         \n\
         class {name} extends Component {{\n\
         \x20 render() {{\n\
         \x20   return (\n\
         \x20     <View>\n\
         \x20       <Text>{name}</Text>\n\
         \x20     </View>\n\
         \x20   );\n\
         \x20 }}\n\
         }}\n\
         {props_decl}\
         \n\
         export default {name};\n"
    )
}

// ── TypeScript bodies ─────────────────────────────────────────────────────────

fn ts_web_body(name: &str, template: BodyTemplate) -> String {
    match template {
        BodyTemplate::Stateful => format!(
            "import * as React from 'react';\n\
             \n\
             class {name} extends React.Component {{\n\
             \x20 render() {{\n\
             \x20   return <div>{name}</div>;\n\
             \x20 }}\n\
             }}\n\
             \n\
             export default {name};\n"
        ),
        BodyTemplate::StatefulWithProps => format!(
            "import * as React from 'react';\n\
             \n\
             export interface {name}Props {{}}\n\
             \n\
             class {name} extends React.Component<{name}Props> {{\n\
             \x20 render() {{\n\
             \x20   return <div>{name}</div>;\n\
             \x20 }}\n\
             }}\n\
             \n\
             export default {name};\n"
        ),
        BodyTemplate::Functional => format!(
            "import * as React from 'react';\n\
             \n\
             const {name}: React.FC = () => <div>{name}</div>;\n\
             \n\
             export default {name};\n"
        ),
        BodyTemplate::FunctionalWithProps => format!(
            "import * as React from 'react';\n\
             \n\
             export interface {name}Props {{}}\n\
             \n\
             const {name}: React.FC<{name}Props> = props => <div>{name}</div>;\n\
             \n\
             export default {name};\n"
        ),
    }
}

fn ts_native_body(name: &str, template: BodyTemplate) -> String {
    let with_props = matches!(
        template,
        BodyTemplate::StatefulWithProps | BodyTemplate::FunctionalWithProps
    );
    let props_iface = if with_props {
        format!("\nexport interface {name}Props {{}}\n")
    } else {
        String::new()
    };
    let generic = if with_props {
        format!("<{name}Props>")
    } else {
        String::new()
    };
    format!(
        "import * as React from 'react';\n\
         import {{ View, Text }} from 'react-native';\n\
         {props_iface}\
         \n\
         class {name} extends React.Component{generic} {{\n\
         \x20 render() {{\n\
         \x20   return (\n\
         \x20     <View>\n\
         \x20       <Text>{name}</Text>\n\
         \x20     </View>\n\
         \x20   );\n\
         \x20 }}\n\
         }}\n\
         \n\
         export default {name};\n"
    )
}

// ── tests ─────────────────────────────────────────────────────────────────────
