//! Static lunch portal configuration
//!
//! Every endpoint here belongs to the external spreadsheet and script
//! platform. Sheet layouts (header rows, column names) live in
//! `lunch_sheet::layout`.

/// Static portal configuration
pub struct Config {
    pub name: &'static str,
    pub version: &'static str,

    pub endpoints: Endpoints,
}

/// External endpoints the portal reads from and writes to
pub struct Endpoints {
    /// Embedded Google Form used to place orders
    pub order_form: &'static str,
    /// Published CSV of the lookup sheet (title row, header row, data)
    pub lookup_csv: &'static str,
    /// Published CSV of the raw form responses (header row, data)
    pub management_csv: &'static str,
    /// Apps Script that deletes response rows
    pub management_script: &'static str,
    /// Apps Script that lists stores and applies daily settings
    pub settings_script: &'static str,
}

pub static CONFIG: Config = Config {
    name: "午餐系統",
    version: "2.0",

    endpoints: Endpoints {
        order_form: "https://docs.google.com/forms/d/e/1FAIpQLScooZ_B9Jm7a2-IsEfJhwhLR7hsLyy8knIU3TKuzM7pw_Z5RQ/viewform?embedded=true",
        lookup_csv: "https://docs.google.com/spreadsheets/d/e/2PACX-1vQISD3cRAvsldviyxyfFi7xQVE12l900EW1yu8_OXOS-uDIr12XAr8zISHsZpJzTBLe_j4kuHWwgdG6/pub?gid=1785595426&single=true&output=csv",
        management_csv: "https://docs.google.com/spreadsheets/d/e/2PACX-1vQISD3cRAvsldviyxyfFi7xQVE12l900EW1yu8_OXOS-uDIr12XAr8zISHsZpJzTBLe_j4kuHWwgdG6/pub?gid=1605656850&single=true&output=csv",
        management_script: "https://script.google.com/macros/s/AKfycbzh9zPFHf6vmhQQR7LrHlokXkPPKnQ2u9ZiqnL6x9kMe4YSaMkrLJJOsqU72OXOIwwo/exec",
        settings_script: "https://script.google.com/macros/s/AKfycbxsG1au7MoB7WKs397tM0ZQciSZkdyM_U5Bgb7FBTzOn9OVLFi6_94waAz3HEddovIY/exec",
    },
};
