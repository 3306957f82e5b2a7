//! Protestant-canon book table.

use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Testament {
    Old,
    New,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookInfo {
    pub code: &'static str,
    /// USFM file stem, e.g. `01-GEN`.
    pub usfm: &'static str,
    pub testament: Testament,
}

/// Repository of the Hebrew Bible.
pub const HEBREW_BIBLE_REPO: &str = "hbo_uhb";
/// Repository of the Greek New Testament.
pub const GREEK_NT_REPO: &str = "el-x-koine_ugnt";

const fn ot(code: &'static str, usfm: &'static str) -> BookInfo {
    BookInfo {
        code,
        usfm,
        testament: Testament::Old,
    }
}

const fn nt(code: &'static str, usfm: &'static str) -> BookInfo {
    BookInfo {
        code,
        usfm,
        testament: Testament::New,
    }
}

static BOOKS: [BookInfo; 66] = [
    ot("GEN", "01-GEN"),
    ot("EXO", "02-EXO"),
    ot("LEV", "03-LEV"),
    ot("NUM", "04-NUM"),
    ot("DEU", "05-DEU"),
    ot("JOS", "06-JOS"),
    ot("JDG", "07-JDG"),
    ot("RUT", "08-RUT"),
    ot("1SA", "09-1SA"),
    ot("2SA", "10-2SA"),
    ot("1KI", "11-1KI"),
    ot("2KI", "12-2KI"),
    ot("1CH", "13-1CH"),
    ot("2CH", "14-2CH"),
    ot("EZR", "15-EZR"),
    ot("NEH", "16-NEH"),
    ot("EST", "17-EST"),
    ot("JOB", "18-JOB"),
    ot("PSA", "19-PSA"),
    ot("PRO", "20-PRO"),
    ot("ECC", "21-ECC"),
    ot("SNG", "22-SNG"),
    ot("ISA", "23-ISA"),
    ot("JER", "24-JER"),
    ot("LAM", "25-LAM"),
    ot("EZK", "26-EZK"),
    ot("DAN", "27-DAN"),
    ot("HOS", "28-HOS"),
    ot("JOL", "29-JOL"),
    ot("AMO", "30-AMO"),
    ot("OBA", "31-OBA"),
    ot("JON", "32-JON"),
    ot("MIC", "33-MIC"),
    ot("NAM", "34-NAM"),
    ot("HAB", "35-HAB"),
    ot("ZEP", "36-ZEP"),
    ot("HAG", "37-HAG"),
    ot("ZEC", "38-ZEC"),
    ot("MAL", "39-MAL"),
    nt("MAT", "41-MAT"),
    nt("MRK", "42-MRK"),
    nt("LUK", "43-LUK"),
    nt("JHN", "44-JHN"),
    nt("ACT", "45-ACT"),
    nt("ROM", "46-ROM"),
    nt("1CO", "47-1CO"),
    nt("2CO", "48-2CO"),
    nt("GAL", "49-GAL"),
    nt("EPH", "50-EPH"),
    nt("PHP", "51-PHP"),
    nt("COL", "52-COL"),
    nt("1TH", "53-1TH"),
    nt("2TH", "54-2TH"),
    nt("1TI", "55-1TI"),
    nt("2TI", "56-2TI"),
    nt("TIT", "57-TIT"),
    nt("PHM", "58-PHM"),
    nt("HEB", "59-HEB"),
    nt("JAS", "60-JAS"),
    nt("1PE", "61-1PE"),
    nt("2PE", "62-2PE"),
    nt("1JN", "63-1JN"),
    nt("2JN", "64-2JN"),
    nt("3JN", "65-3JN"),
    nt("JUD", "66-JUD"),
    nt("REV", "67-REV"),
];

/// Look up a book by its three-character code, ignoring case.
pub fn book_info(code: &str) -> Option<&'static BookInfo> {
    let code = code.trim();
    BOOKS.iter().find(|book| book.code.eq_ignore_ascii_case(code))
}

/// Original-language repository holding the given testament.
pub fn original_language_repo(testament: Testament) -> &'static str {
    match testament {
        Testament::Old => HEBREW_BIBLE_REPO,
        Testament::New => GREEK_NT_REPO,
    }
}

pub fn is_original_language_repo(repo: &str) -> bool {
    repo == HEBREW_BIBLE_REPO || repo == GREEK_NT_REPO
}

/// Book code from a note file name such as `tn_TIT.tsv` or `twl_1JN.tsv`.
pub fn infer_book(path: &Path) -> Option<&'static BookInfo> {
    let stem = path.file_stem()?.to_str()?;
    let (_, code) = stem.rsplit_once('_')?;
    book_info(code)
}
