//! Fixed values of the GraphML and yEd output formats
//!
//! The yEd tool recognises a generated file by these exact strings, so none of
//! them are user-configurable.

/// GraphML document constants
pub mod graphml {
    pub const XML_VERSION: &str = "1.0";
    pub const ENCODING: &str = "UTF-8";

    pub const NAMESPACE: &str = "http://graphml.graphdrawing.org/xmlns";
    pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
    pub const SCHEMA_LOCATION: &str = "http://graphml.graphdrawing.org/xmlns \
                                       http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd";

    pub const GRAPH_ID_PREFIX: &str = "G";
    pub const NODE_ID_PREFIX: &str = "N";
}

/// yEd extension constants
pub mod yed {
    pub const PREFIX: &str = "y";
    pub const NAMESPACE: &str = "http://www.yworks.com/xml/graphml";

    pub const KEY_RESOURCES: &str = "d0";
    pub const KEY_NODE_URL: &str = "d1";
    pub const KEY_NODE_DESCRIPTION: &str = "d2";
    pub const KEY_NODE_GRAPHICS: &str = "d3";
    pub const KEY_EDGE_URL: &str = "d4";
    pub const KEY_EDGE_DESCRIPTION: &str = "d5";
    pub const KEY_EDGE_GRAPHICS: &str = "d6";

    pub const BORDER_COLOR: &str = "#000000";
    pub const DEFAULT_BORDER_WIDTH: u32 = 1;

    /// Node label defaults
    pub mod label {
        pub const ALIGNMENT: &str = "center";
        pub const AUTO_SIZE_POLICY: &str = "content";
        pub const FONT_FAMILY: &str = "Dialog";
        pub const FONT_SIZE: u32 = 12;
        pub const FONT_STYLE: &str = "plain";
        pub const MODEL_NAME: &str = "internal";
        pub const MODEL_POSITION: &str = "c";
        pub const TEXT_COLOR: &str = "#000000";
        pub const WIDTH: f64 = 30.0;
    }

    /// Geometry estimation: every line or character adds `UNIT` on top of
    /// `BASE`
    pub mod geometry {
        pub const UNIT: f64 = 8.0;
        pub const BASE: f64 = 10.0;
    }
}
