//! AWS Systems Manager Incident Manager Contacts (`ssm-contacts`, AWS JSON 1.1, 2021-05-03).

use super::{Member, Operation, Paginator, Protocol, ServiceModel};

pub static SERVICE: ServiceModel = ServiceModel {
    name: "SSM Contacts",
    endpoint_prefix: "ssm-contacts",
    signing_name: "ssm-contacts",
    api_version: "2021-05-03",
    protocol: Protocol::AwsJson1_1,
    target_prefix: Some("SSMContacts"),
    env_suffix: "SSM_CONTACTS",
    operations: &[
        &ACCEPT_PAGE,
        &ACTIVATE_CONTACT_CHANNEL,
        &CREATE_CONTACT,
        &CREATE_CONTACT_CHANNEL,
        &DEACTIVATE_CONTACT_CHANNEL,
        &DELETE_CONTACT,
        &DELETE_CONTACT_CHANNEL,
        &DESCRIBE_ENGAGEMENT,
        &DESCRIBE_PAGE,
        &GET_CONTACT,
        &GET_CONTACT_CHANNEL,
        &GET_CONTACT_POLICY,
        &LIST_CONTACT_CHANNELS,
        &LIST_CONTACTS,
        &LIST_ENGAGEMENTS,
        &LIST_PAGE_RECEIPTS,
        &LIST_PAGES_BY_CONTACT,
        &LIST_PAGES_BY_ENGAGEMENT,
        &LIST_TAGS_FOR_RESOURCE,
        &PUT_CONTACT_POLICY,
        &SEND_ACTIVATION_CODE,
        &START_ENGAGEMENT,
        &STOP_ENGAGEMENT,
        &TAG_RESOURCE,
        &UNTAG_RESOURCE,
        &UPDATE_CONTACT,
        &UPDATE_CONTACT_CHANNEL,
    ],
};

const PAGES: Paginator = Paginator::pascal_next_token();

pub const ACCEPT_PAGE: Operation = rpc!(
    "AcceptPage",
    [
        Member::body("PageId").required(),
        Member::body("ContactChannelId"),
        Member::body("AcceptType").required(),
        Member::body("Note"),
        Member::body("AcceptCode").required(),
        Member::body("AcceptCodeValidation"),
    ]
);

pub const ACTIVATE_CONTACT_CHANNEL: Operation = rpc!(
    "ActivateContactChannel",
    [
        Member::body("ContactChannelId").required(),
        Member::body("ActivationCode").required(),
    ]
);

pub const CREATE_CONTACT: Operation = rpc!(
    "CreateContact",
    [
        Member::body("Alias").required(),
        Member::body("DisplayName"),
        Member::body("Type").required(),
        Member::body("Plan").required(),
        Member::body("Tags"),
        Member::body("IdempotencyToken").idempotency_token(),
    ]
);

pub const CREATE_CONTACT_CHANNEL: Operation = rpc!(
    "CreateContactChannel",
    [
        Member::body("ContactId").required(),
        Member::body("Name").required(),
        Member::body("Type").required(),
        Member::body("DeliveryAddress").required(),
        Member::body("DeferActivation"),
        Member::body("IdempotencyToken").idempotency_token(),
    ]
);

pub const DEACTIVATE_CONTACT_CHANNEL: Operation = rpc!(
    "DeactivateContactChannel",
    [Member::body("ContactChannelId").required()]
);

pub const DELETE_CONTACT: Operation = rpc!("DeleteContact", [Member::body("ContactId").required()]);

pub const DELETE_CONTACT_CHANNEL: Operation = rpc!(
    "DeleteContactChannel",
    [Member::body("ContactChannelId").required()]
);

pub const DESCRIBE_ENGAGEMENT: Operation = rpc!(
    "DescribeEngagement",
    [Member::body("EngagementId").required()]
);

pub const DESCRIBE_PAGE: Operation = rpc!("DescribePage", [Member::body("PageId").required()]);

pub const GET_CONTACT: Operation = rpc!("GetContact", [Member::body("ContactId").required()]);

pub const GET_CONTACT_CHANNEL: Operation = rpc!(
    "GetContactChannel",
    [Member::body("ContactChannelId").required()]
);

pub const GET_CONTACT_POLICY: Operation =
    rpc!("GetContactPolicy", [Member::body("ContactArn").required()]);

pub const LIST_CONTACT_CHANNELS: Operation = rpc!(
    "ListContactChannels",
    [
        Member::body("ContactId").required(),
        Member::body("NextToken"),
        Member::body("MaxResults"),
    ],
    PAGES
);

pub const LIST_CONTACTS: Operation = rpc!(
    "ListContacts",
    [
        Member::body("NextToken"),
        Member::body("MaxResults"),
        Member::body("AliasPrefix"),
        Member::body("Type"),
    ],
    PAGES
);

pub const LIST_ENGAGEMENTS: Operation = rpc!(
    "ListEngagements",
    [
        Member::body("NextToken"),
        Member::body("MaxResults"),
        Member::body("IncidentId"),
        Member::body("TimeRangeValue"),
    ],
    PAGES
);

pub const LIST_PAGE_RECEIPTS: Operation = rpc!(
    "ListPageReceipts",
    [
        Member::body("PageId").required(),
        Member::body("NextToken"),
        Member::body("MaxResults"),
    ],
    PAGES
);

pub const LIST_PAGES_BY_CONTACT: Operation = rpc!(
    "ListPagesByContact",
    [
        Member::body("ContactId").required(),
        Member::body("NextToken"),
        Member::body("MaxResults"),
    ],
    PAGES
);

pub const LIST_PAGES_BY_ENGAGEMENT: Operation = rpc!(
    "ListPagesByEngagement",
    [
        Member::body("EngagementId").required(),
        Member::body("NextToken"),
        Member::body("MaxResults"),
    ],
    PAGES
);

pub const LIST_TAGS_FOR_RESOURCE: Operation = rpc!(
    "ListTagsForResource",
    [Member::body("ResourceARN").required()]
);

pub const PUT_CONTACT_POLICY: Operation = rpc!(
    "PutContactPolicy",
    [
        Member::body("ContactArn").required(),
        Member::body("Policy").required(),
    ]
);

pub const SEND_ACTIVATION_CODE: Operation = rpc!(
    "SendActivationCode",
    [Member::body("ContactChannelId").required()]
);

pub const START_ENGAGEMENT: Operation = rpc!(
    "StartEngagement",
    [
        Member::body("ContactId").required(),
        Member::body("Sender").required(),
        Member::body("Subject").required(),
        Member::body("Content").required(),
        Member::body("PublicSubject"),
        Member::body("PublicContent"),
        Member::body("IncidentId"),
        Member::body("IdempotencyToken").idempotency_token(),
    ]
);

pub const STOP_ENGAGEMENT: Operation = rpc!(
    "StopEngagement",
    [
        Member::body("EngagementId").required(),
        Member::body("Reason"),
    ]
);

pub const TAG_RESOURCE: Operation = rpc!(
    "TagResource",
    [
        Member::body("ResourceARN").required(),
        Member::body("Tags").required(),
    ]
);

pub const UNTAG_RESOURCE: Operation = rpc!(
    "UntagResource",
    [
        Member::body("ResourceARN").required(),
        Member::body("TagKeys").required(),
    ]
);

pub const UPDATE_CONTACT: Operation = rpc!(
    "UpdateContact",
    [
        Member::body("ContactId").required(),
        Member::body("DisplayName"),
        Member::body("Plan"),
    ]
);

pub const UPDATE_CONTACT_CHANNEL: Operation = rpc!(
    "UpdateContactChannel",
    [
        Member::body("ContactChannelId").required(),
        Member::body("Name"),
        Member::body("DeliveryAddress"),
    ]
);
