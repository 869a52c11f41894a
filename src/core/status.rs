//! 响应状态接口与状态枚举
//!
//! 任何"状态码 + 消息"的组合都可以实现 [`RespStatus`]，然后交给
//! [`ApiResponse`](crate::ApiResponse) 填充 `code` 和 `msg`。
//! 业务方通常用 [`define_resp_status!`](crate::define_resp_status) 声明自己的状态枚举：
//!
//! ```
//! use web_common::{define_resp_status, ApiResponse, RespStatus};
//!
//! define_resp_status! {
//!     /// 订单相关状态
//!     pub enum OrderStatus {
//!         Created = (0, "ok"),
//!         OutOfStock = (10001, "库存不足"),
//!     }
//! }
//!
//! let resp: ApiResponse<()> = ApiResponse::from_status(&OrderStatus::OutOfStock);
//! assert_eq!(resp.code(), 10001);
//! assert_eq!(OrderStatus::from_code(10001), Some(OrderStatus::OutOfStock));
//! ```

/// 响应状态接口：提供状态码和消息
///
/// 实现者应当是常量性质的值（枚举成员、静态元组等），`code` 与 `msg`
/// 总是成对出现。
pub trait RespStatus {
    /// 状态码，`0` 表示成功
    fn code(&self) -> i32;

    /// 状态描述消息
    fn msg(&self) -> &str;

    /// 是否是成功状态
    fn is_ok(&self) -> bool {
        self.code() == 0
    }
}

impl<T: RespStatus + ?Sized> RespStatus for &T {
    fn code(&self) -> i32 {
        (**self).code()
    }

    fn msg(&self) -> &str {
        (**self).msg()
    }
}

impl<T: RespStatus + ?Sized> RespStatus for Box<T> {
    fn code(&self) -> i32 {
        (**self).code()
    }

    fn msg(&self) -> &str {
        (**self).msg()
    }
}

impl RespStatus for (i32, &str) {
    fn code(&self) -> i32 {
        self.0
    }

    fn msg(&self) -> &str {
        self.1
    }
}

impl RespStatus for (i32, String) {
    fn code(&self) -> i32 {
        self.0
    }

    fn msg(&self) -> &str {
        &self.1
    }
}

/// 声明一个实现了 [`RespStatus`] 的状态枚举
///
/// 每个成员写成 `Name = (code, "message")`。生成的枚举额外提供
/// `ALL`、`from_code` 以及 `"<code> <message>"` 格式的 `Display`。
#[macro_export]
macro_rules! define_resp_status {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = ($code:expr, $msg:expr) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// 按声明顺序列出的全部状态
            pub const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

            /// 按状态码查找，多个成员同码时返回先声明的那个
            pub fn from_code(code: i32) -> ::core::option::Option<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|status| $crate::RespStatus::code(status) == code)
            }
        }

        impl $crate::RespStatus for $name {
            fn code(&self) -> i32 {
                match self {
                    $( Self::$variant => $code ),+
                }
            }

            fn msg(&self) -> &str {
                match self {
                    $( Self::$variant => $msg ),+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(
                    f,
                    "{} {}",
                    $crate::RespStatus::code(self),
                    $crate::RespStatus::msg(self)
                )
            }
        }
    };
}

define_resp_status! {
    /// 内置的通用状态
    ///
    /// 业务错误码用 HTTP 语义的数字，`Ok` 和 `Fail` 是约定俗成的 0 / 1。
    pub enum CommonStatus {
        Ok = (0, "ok"),
        Fail = (1, "fail"),
        BadRequest = (400, "bad request"),
        Unauthorized = (401, "unauthorized"),
        Forbidden = (403, "forbidden"),
        NotFound = (404, "not found"),
        Conflict = (409, "conflict"),
        InternalError = (500, "internal error"),
    }
}

impl Default for CommonStatus {
    fn default() -> Self {
        Self::Ok
    }
}
