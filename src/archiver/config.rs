pub mod api {
    pub const BASE_URL: &str = "https://codeforces.com";
    pub const CONTEST_LIST: &str = "api/contest.list";
    pub const USER_STATUS: &str = "api/user.status";
}
pub mod session {
    pub const VERBOSE: bool = false;
    pub const USER_AGENT: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:78.0) Gecko/20100101 Firefox/78.0";
}
pub mod storage {
    pub const OUTPUT_FOLDER: &str = "Solutions";
}
