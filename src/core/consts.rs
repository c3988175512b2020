pub const WALL: char = '#';
pub const FLOOR: char = ' ';
pub const TARGET: char = '.';
pub const CRATE: char = '$';
pub const CRATE_ON_TARGET: char = '*';
pub const PLAYER: char = '@';
pub const PLAYER_ON_TARGET: char = '+';

pub const EDITOR_DEFAULT_WIDTH: i32 = 30;
pub const EDITOR_DEFAULT_HEIGHT: i32 = 20;

pub const BUILTIN_LEVEL: &str = r#"
########
#      #
# $  . #
#  @   #
# $  . #
#      #
########
"#;
