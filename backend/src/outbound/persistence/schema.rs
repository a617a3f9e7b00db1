//! Diesel table definitions for the legacy SQL schema.
//!
//! The Rust identifiers are snake_case; `sql_name` annotations pin every
//! table and column to the exact mixed-case legacy names so generated SQL
//! stays compatible with the existing database. These definitions must
//! match `migrations/` exactly.

diesel::table! {
    /// Top-level menu rows (`ObjType` default '1').
    #[sql_name = "Menu"]
    menu (id) {
        #[sql_name = "Id"]
        id -> Int4,
        #[sql_name = "ObjType"]
        obj_type -> Nullable<Varchar>,
        #[sql_name = "IdMenu"]
        id_menu -> Int4,
        #[sql_name = "OpMenu"]
        op_menu -> Varchar,
        #[sql_name = "Pos"]
        pos -> Int4,
        #[sql_name = "Imagen"]
        imagen -> Nullable<Varchar>,
        #[sql_name = "Url"]
        url -> Nullable<Varchar>,
        #[sql_name = "Idioma"]
        idioma -> Varchar,
        #[sql_name = "Activo"]
        activo -> Nullable<Bool>,
    }
}

diesel::table! {
    /// Child menu rows; `IdMenu` references the owning `Menu.Id`.
    #[sql_name = "SubMenu"]
    sub_menu (id) {
        #[sql_name = "Id"]
        id -> Int4,
        #[sql_name = "ObjType"]
        obj_type -> Nullable<Varchar>,
        #[sql_name = "IdMenu"]
        id_menu -> Int4,
        #[sql_name = "OpMenu"]
        op_menu -> Varchar,
        #[sql_name = "Pos"]
        pos -> Int4,
        #[sql_name = "Imagen"]
        imagen -> Nullable<Varchar>,
        #[sql_name = "Url"]
        url -> Nullable<Varchar>,
        #[sql_name = "Idioma"]
        idioma -> Varchar,
        #[sql_name = "Activo"]
        activo -> Nullable<Bool>,
    }
}

diesel::table! {
    /// Toolbar/button menu rows (`ObjType` default '4').
    #[sql_name = "BotoneraMenu"]
    botonera_menu (id) {
        #[sql_name = "Id"]
        id -> Int4,
        #[sql_name = "ObjType"]
        obj_type -> Nullable<Varchar>,
        #[sql_name = "IdMenu"]
        id_menu -> Int4,
        #[sql_name = "OpMenu"]
        op_menu -> Varchar,
        #[sql_name = "Pos"]
        pos -> Int4,
        #[sql_name = "Imagen"]
        imagen -> Nullable<Varchar>,
        #[sql_name = "Url"]
        url -> Nullable<Varchar>,
        #[sql_name = "Idioma"]
        idioma -> Varchar,
        #[sql_name = "Activo"]
        activo -> Nullable<Bool>,
    }
}

diesel::table! {
    /// Permission grants keyed by (`UserId`, `PermId`).
    #[sql_name = "Auth"]
    auth (user_id, perm_id) {
        #[sql_name = "Id"]
        object_id -> Int4,
        #[sql_name = "ObjType"]
        obj_type -> Nullable<Varchar>,
        #[sql_name = "UserId"]
        user_id -> Int4,
        #[sql_name = "PermId"]
        perm_id -> Varchar,
        #[sql_name = "Permission"]
        permission -> Nullable<Bpchar>,
        #[sql_name = "Activo"]
        activo -> Bool,
    }
}

diesel::table! {
    /// User groups.
    #[sql_name = "OUGR"]
    ougr (group_id) {
        #[sql_name = "Id"]
        id -> Int4,
        #[sql_name = "GroupId"]
        group_id -> Int4,
        #[sql_name = "GroupName"]
        group_name -> Varchar,
        #[sql_name = "GroupDec"]
        group_dec -> Nullable<Varchar>,
        #[sql_name = "TPLId"]
        tpl_id -> Nullable<Int4>,
        #[sql_name = "Activo"]
        activo -> Nullable<Bool>,
    }
}

diesel::table! {
    /// User accounts: credentials, lockout/audit state, profile and the
    /// free-form preference blob.
    #[sql_name = "OUSR"]
    ousr (user_id) {
        #[sql_name = "USERID"]
        user_id -> Int4,
        #[sql_name = "PASSWORD"]
        password -> Nullable<Varchar>,
        #[sql_name = "INTERNAL_K"]
        internal_k -> Int4,
        #[sql_name = "USER_CODE"]
        user_code -> Varchar,
        #[sql_name = "U_NAME"]
        u_name -> Nullable<Varchar>,
        #[sql_name = "GROUPS"]
        groups -> Nullable<Int4>,
        #[sql_name = "SUPERUSER"]
        superuser -> Nullable<Bpchar>,
        #[sql_name = "E_Mail"]
        e_mail -> Nullable<Varchar>,
        #[sql_name = "Locked"]
        locked -> Nullable<Bpchar>,
        #[sql_name = "Department"]
        department -> Nullable<Int4>,
        #[sql_name = "UserPrefs"]
        user_prefs -> Nullable<Bytea>,
        #[sql_name = "Language"]
        language -> Nullable<Int4>,
        #[sql_name = "Tel1"]
        tel1 -> Nullable<Varchar>,
        #[sql_name = "Tel2"]
        tel2 -> Nullable<Varchar>,
        #[sql_name = "EnbMenuFlt"]
        enb_menu_flt -> Nullable<Bpchar>,
        #[sql_name = "objType"]
        obj_type -> Nullable<Varchar>,
        #[sql_name = "createDate"]
        create_date -> Nullable<Timestamptz>,
        #[sql_name = "userSign2"]
        user_sign2 -> Nullable<Int4>,
        #[sql_name = "updateDate"]
        update_date -> Nullable<Timestamptz>,
        #[sql_name = "OneLogPwd"]
        one_log_pwd -> Nullable<Bpchar>,
        #[sql_name = "lastLogin"]
        last_login -> Nullable<Timestamptz>,
        #[sql_name = "LastPwds"]
        last_pwds -> Nullable<Varchar>,
        #[sql_name = "LastPwds2"]
        last_pwds2 -> Nullable<Varchar>,
        #[sql_name = "LastPwdSet"]
        last_pwd_set -> Nullable<Timestamptz>,
        #[sql_name = "PwdNeverEx"]
        pwd_never_ex -> Nullable<Bpchar>,
        #[sql_name = "LstLogoutD"]
        lst_logout_d -> Nullable<Timestamptz>,
        #[sql_name = "LstLoginT"]
        lst_login_t -> Nullable<Int4>,
        #[sql_name = "LstLogoutT"]
        lst_logout_t -> Nullable<Int4>,
        #[sql_name = "LstPwdChT"]
        lst_pwd_ch_t -> Nullable<Int4>,
        #[sql_name = "LstPwdChB"]
        lst_pwd_ch_b -> Nullable<Varchar>,
        #[sql_name = "RclFlag"]
        rcl_flag -> Nullable<Bpchar>,
    }
}

diesel::table! {
    /// Loose user records. The legacy table declares no primary key; `id`
    /// is nominated here for Diesel's benefit only.
    #[sql_name = "Usuarios"]
    usuarios (id) {
        id -> Nullable<Int4>,
        name -> Nullable<Varchar>,
        last_name -> Nullable<Varchar>,
        dni -> Nullable<Varchar>,
    }
}

diesel::table! {
    /// Exchange rates keyed by (`RateDate`, `Currency`).
    #[sql_name = "ExCHRate"]
    exch_rate (rate_date, currency) {
        #[sql_name = "RateDate"]
        rate_date -> Date,
        #[sql_name = "Currency"]
        currency -> Varchar,
        #[sql_name = "Rate"]
        rate -> Nullable<Float8>,
        #[sql_name = "UserSign"]
        user_sign -> Nullable<Int4>,
    }
}

// The Menu -> SubMenu relation is configuration, not a database constraint:
// the legacy schema has no foreign key and the listing enforces it via an
// inner join.
diesel::joinable!(sub_menu -> menu (id_menu));

diesel::allow_tables_to_appear_in_same_query!(menu, sub_menu);
