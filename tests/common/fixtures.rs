//! Test fixtures - reusable theme content for tests.

/// Theme pulling one stylesheet from an installed package
pub const CSS_THEME: &str = r#"<html><head>
<link rel="stylesheet" href="<%=paths.modules%>/acme-css/style.css">
</head><body></body></html>"#;

/// Theme using a stylesheet, a bundled script and a local script
pub const FULL_THEME: &str = r#"<html>
<head>
<link rel="stylesheet" href="<%=paths.modules%>/acme-css/style.css">
<script src="<%=paths.modules%>/acme-js/dist/acme.js"></script>
</head>
<body class="<%= debugMode %>">
<script src="<%=paths.theme%>/js/widgets.js"></script>
</body>
</html>"#;

/// Local script requiring one installed package and host modules
pub const WIDGETS_JS: &str = r#"var electron = require('electron');
var fs = require("fs");
var moment = require("moment");
var helper = require('./helper');"#;

/// Theme whose stylesheet package is never installed
pub const MISSING_ICONS_THEME: &str = r#"<html><head>
<link rel="stylesheet" href="<%=paths.modules%>/foo-theme-icons/icons.css">
</head></html>"#;

/// Theme with only a local script
pub const LOCAL_ONLY_THEME: &str = r#"<body>
<script src="<%=paths.theme%>/main.js"></script>
</body>"#;

pub const ACME_CSS: &str = "body{color:red}";
pub const ACME_JS: &str = "window.acme = {};";
