/// Looks up a message in the embedded language pack for the current locale.
///
/// `t!(font_linked, family = name, font = file)` fills the `{family}` and
/// `{font}` placeholders of the template.
#[macro_export]
macro_rules! t {
    ($item:ident) => {
        $crate::localization::config::translate(&$crate::localization::config::get_pack().$item)
    };

    ($item:ident, $($key:ident = $value:expr),+ $(,)?) => {{
        let mut message = $crate::t!($item).to_string();
        $(message = message.replace(concat!("{", stringify!($key), "}"), &$value.to_string());)+
        message
    }};
}
